use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const PROPERTIES: &str = "webapp/i18n/i18n.properties";

fn setup_project(test: &CliTest) -> Result<()> {
    test.write_file(
        "webapp/view/Main.view.xml",
        r#"<mvc:View xmlns:mvc="sap.ui.core.mvc" xmlns="sap.m">
    <Page title="{i18n>greeting}">
        <Button text="{i18n>newToken}" press=".onPress"/>
    </Page>
</mvc:View>
"#,
    )?;
    test.write_file(
        PROPERTIES,
        "# Texts\ngreeting=Hello\n#farewell=Bye\nunused=X\n",
    )
}

#[test]
fn test_dry_run_reports_changes_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    assert_cmd_snapshot!(test.sync_command(), @r"
success: true
exit_code: 0
----- stdout -----
APPEND token newToken
DEACTIVATE token unused
✘ Would update webapp/i18n/i18n.properties: 1 appended, 1 deactivated, 0 activated (2 tokens in 1 file)
Run with --apply to write the changes.

----- stderr -----
");
    assert_eq!(
        test.read_file(PROPERTIES)?,
        "# Texts\ngreeting=Hello\n#farewell=Bye\nunused=X\n"
    );

    Ok(())
}

#[test]
fn test_apply_writes_merged_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let mut cmd = test.sync_command();
    cmd.arg("--apply");

    assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----
APPEND token newToken
DEACTIVATE token unused
✓ Updated webapp/i18n/i18n.properties: 1 appended, 1 deactivated, 0 activated (2 tokens in 1 file)

----- stderr -----
");
    assert_eq!(
        test.read_file(PROPERTIES)?,
        "# Texts\ngreeting=Hello\n#farewell=Bye\n#unused=X\nnewToken=new token\n"
    );

    Ok(())
}

#[test]
fn test_second_apply_is_a_no_op() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    test.sync_command().arg("--apply").output()?;
    let first = test.read_file(PROPERTIES)?;

    let mut cmd = test.sync_command();
    cmd.arg("--apply");

    assert_cmd_snapshot!(cmd, @r"
success: true
exit_code: 0
----- stdout -----
✓ webapp/i18n/i18n.properties is up to date (2 tokens in 1 file)

----- stderr -----
");
    assert_eq!(test.read_file(PROPERTIES)?, first);

    Ok(())
}

#[test]
fn test_reactivates_token_used_again() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        "webapp/controller/Main.controller.js",
        r#"sap.ui.define([], function () {
    return {
        onPress: function () {
            MessageToast.show(this.getResourceBundle().getText("farewell"));
        }
    };
});
"#,
    )?;

    let output = test.sync_command().arg("--apply").output()?;

    assert!(stdout(&output).contains("ACTIVATE token farewell"));
    assert_eq!(
        test.read_file(PROPERTIES)?,
        "# Texts\ngreeting=Hello\nfarewell=Bye\n#unused=X\nnewToken=new token\n"
    );

    Ok(())
}

#[test]
fn test_no_deactivate_flag_keeps_entry_active() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    test.sync_command()
        .args(["--apply", "--no-deactivate", "unused"])
        .output()?;

    assert_eq!(
        test.read_file(PROPERTIES)?,
        "# Texts\ngreeting=Hello\n#farewell=Bye\nunused=X\nnewToken=new token\n"
    );

    Ok(())
}

#[test]
fn test_config_file_controls_output_and_exemptions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nsyncrc.json",
        r#"{
            "sources": ["src/**/*.html"],
            "output": { "fileName": "i18n/messages.properties" },
            "noDeactivateTokens": ["appTitle"]
        }"#,
    )?;
    test.write_file("src/index.html", "<title>{i18n>pageHeader}</title>")?;
    test.write_file("i18n/messages.properties", "appTitle=App\nstale=Stale\n")?;

    let output = test.sync_command().arg("--apply").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("i18n/messages.properties")?,
        "appTitle=App\n#stale=Stale\npageHeader=page header\n"
    );

    Ok(())
}

#[test]
fn test_bare_string_config_sets_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsyncrc.json", r#""messages.properties""#)?;
    test.write_file("webapp/manifest.json", r#"{ "title": "{{appTitle}}" }"#)?;
    test.write_file("messages.properties", "")?;

    let output = test.sync_command().arg("--apply").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("messages.properties")?, "appTitle=app title\n");

    Ok(())
}

#[test]
fn test_positional_sources_and_output_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("ui/Dialog.fragment.xml", "<Dialog title=\"{i18n>dialogTitle}\"/>")?;
    test.write_file("ui/notes.txt", "{i18n>notScanned}")?;
    test.write_file("texts.properties", "")?;

    let output = test
        .sync_command()
        .args(["ui", "--output", "texts.properties", "--apply", "-v"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("skipped ui/notes.txt (no matching pattern)"));
    assert_eq!(test.read_file("texts.properties")?, "dialogTitle=dialog title\n");

    Ok(())
}

#[test]
fn test_missing_output_file_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("webapp/view/Main.view.xml", "<Page title=\"{i18n>greeting}\"/>")?;

    test.snapshot_settings().bind(|| {
        let mut cmd = test.sync_command();
        cmd.arg("--apply");
        assert_cmd_snapshot!(cmd, @r#"
success: false
exit_code: 2
----- stdout -----

----- stderr -----
Error: Failed to read output file: "[PROJECT]/webapp/i18n/i18n.properties": No such file or directory (os error 2)
"#);
    });
    assert!(!test.root().join(PROPERTIES).exists());

    Ok(())
}

#[test]
fn test_no_matching_sources_leaves_output_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(PROPERTIES, "greeting=Hello\n\n\n")?;

    let output = test.sync_command().arg("--apply").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("No source files processed"));
    assert_eq!(test.read_file(PROPERTIES)?, "greeting=Hello\n\n\n");

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nsyncrc.json",
        r#"{ "patterns": [{ "fileExtensions": ["js"], "pattern": "getText\\(" }] }"#,
    )?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("patterns"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("sync"));

    Ok(())
}

#[test]
fn test_literal_ignore_skips_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nsyncrc.json",
        r#"{ "sources": ["webapp"], "ignores": ["webapp/test"] }"#,
    )?;
    test.write_file("webapp/view/Main.view.xml", "<Page title=\"{i18n>greeting}\"/>")?;
    test.write_file("webapp/test/T.view.xml", "<Page title=\"{i18n>testOnly}\"/>")?;
    test.write_file(PROPERTIES, "greeting=Hello\n")?;

    let output = test.sync_command().arg("--apply").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!stdout(&output).contains("testOnly"));
    assert_eq!(test.read_file(PROPERTIES)?, "greeting=Hello\n");

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_stream_input_fails_but_still_writes_output() -> Result<()> {
    use std::process::Command;

    let test = CliTest::new()?;
    setup_project(&test)?;
    let fifo = test.root().join("webapp/view/Pipe.view.xml");
    let status = Command::new("mkfifo").arg(&fifo).status()?;
    assert!(status.success(), "mkfifo failed");

    let mut cmd = test.sync_command();
    cmd.arg("--apply");

    assert_cmd_snapshot!(cmd, @r"
success: false
exit_code: 1
----- stdout -----
APPEND token newToken
DEACTIVATE token unused
✓ Updated webapp/i18n/i18n.properties: 1 appended, 1 deactivated, 0 activated (2 tokens in 1 file)

----- stderr -----
error: webapp/view/Pipe.view.xml: Streaming not supported
");
    assert_eq!(
        test.read_file(PROPERTIES)?,
        "# Texts\ngreeting=Hello\n#farewell=Bye\n#unused=X\nnewToken=new token\n"
    );

    Ok(())
}
