//! Regex patterns used by the line parser.
//!
//! All patterns are compiled once on first use and shared by every parser.

use regex::Regex;
use std::sync::LazyLock;

/// `DD.MM.YYYY` as a whole token. Calendar correctness is not checked here.
pub const DATE_PATTERN: &str = r"\b[0-9]{2}\.[0-9]{2}\.[0-9]{4}\b";

/// `H:MM` or `HH:MM` as a whole token. Ranges are not checked here.
pub const TIME_PATTERN: &str = r"\b[0-9]{1,2}:[0-9]{2}\b";

/// A span delimited by double quotes.
pub const QUOTED_PATTERN: &str = r#""([^"]*)""#;

/// Surname, optionally followed by given name (and patronymic) or by two
/// initials. Letters are Cyrillic or Latin.
pub const NAME_PATTERN: &str = r"(?x)
    \b
    (?P<surname>[А-ЯЁA-Z][а-яёa-z]+(?:-[А-ЯЁA-Z][а-яёa-z]+)?)
    (?:\s+
        (?:
            (?P<given>[А-ЯЁA-Z][а-яёa-z]+)
            (?:\s+(?P<patronymic>[А-ЯЁA-Z][а-яёa-z]+))?
          |
            (?P<first_initial>[А-ЯЁA-Z])\.\s*(?P<second_initial>[А-ЯЁA-Z])\.
        )
    )?
";

/// Separators collapsed to a single space by the leftover rule.
pub const SEPARATOR_PATTERN: &str = r"[,\t;]+";

pub const WHITESPACE_PATTERN: &str = r"\s+";

pub static DATE: LazyLock<Regex> = LazyLock::new(|| builtin(DATE_PATTERN));
pub static TIME: LazyLock<Regex> = LazyLock::new(|| builtin(TIME_PATTERN));
pub static QUOTED: LazyLock<Regex> = LazyLock::new(|| builtin(QUOTED_PATTERN));
pub static NAME: LazyLock<Regex> = LazyLock::new(|| builtin(NAME_PATTERN));
pub static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| builtin(SEPARATOR_PATTERN));
pub static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| builtin(WHITESPACE_PATTERN));

#[expect(clippy::expect_used, reason = "built-in pattern literals always compile")]
fn builtin(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_compile() {
        for pattern in [
            DATE_PATTERN,
            TIME_PATTERN,
            QUOTED_PATTERN,
            NAME_PATTERN,
            SEPARATOR_PATTERN,
            WHITESPACE_PATTERN,
        ] {
            assert!(Regex::new(pattern).is_ok(), "pattern failed: {pattern}");
        }
    }

    #[test]
    fn test_date_requires_whole_token() {
        assert!(DATE.is_match("15.03.2024"));
        assert!(!DATE.is_match("115.03.2024"));
        assert!(!DATE.is_match("15.03.20245"));
        assert!(!DATE.is_match("5.03.2024"));
    }

    #[test]
    fn test_time_accepts_one_or_two_digit_hour() {
        assert_eq!(TIME.find("в 9:00").map(|m| m.as_str()), Some("9:00"));
        assert_eq!(TIME.find("в 14:30").map(|m| m.as_str()), Some("14:30"));
        assert!(!TIME.is_match("123:45"));
        assert!(!TIME.is_match("12:345"));
    }

    #[test]
    fn test_name_captures_initials() {
        let caps = NAME.captures("Смирнова А. Б.");
        let caps = caps.as_ref();
        assert_eq!(caps.and_then(|c| c.name("surname")).map(|m| m.as_str()), Some("Смирнова"));
        assert_eq!(caps.and_then(|c| c.name("first_initial")).map(|m| m.as_str()), Some("А"));
        assert_eq!(caps.and_then(|c| c.name("second_initial")).map(|m| m.as_str()), Some("Б"));
    }

    #[test]
    fn test_name_does_not_start_mid_word() {
        assert!(!NAME.is_match("иванОв"));
    }
}
