use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created"));

    let content = test.read_file(".i18nsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(
        parsed["output"]["fileName"],
        Value::from("webapp/i18n/i18n.properties")
    );
    assert_eq!(parsed["patterns"].as_array().map(Vec::len), Some(3));
    assert!(parsed.get("noDeactivateTokens").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsyncrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".i18nsyncrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("webapp/view/Main.view.xml", r#"<Page title="{i18n>appTitle}"/>"#)?;
    test.write_file("webapp/i18n/i18n.properties", "appTitle=My App\n")?;

    let output = test.sync_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("is up to date"));

    Ok(())
}
