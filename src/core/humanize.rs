use std::sync::LazyLock;

use regex::{Captures, Regex};

static CASE_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// Convert a camel-cased token into a default message.
///
/// Every lowercase letter directly followed by an uppercase letter gets a
/// space between them and the uppercase letter is lowercased. Acronyms and
/// digits are left alone.
///
/// # Examples
///
/// ```
/// use i18nsync::core::token_to_message;
///
/// assert_eq!(token_to_message("MyUsefulMessage"), "My useful message");
/// assert_eq!(token_to_message("ABC"), "ABC");
/// ```
pub fn token_to_message(token: &str) -> String {
    CASE_BOUNDARY_REGEX
        .replace_all(token, |caps: &Captures| {
            format!("{} {}", &caps[1], caps[2].to_lowercase())
        })
        .into_owned()
}
