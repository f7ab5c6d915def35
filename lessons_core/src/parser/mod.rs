//! Line parser: one raw schedule line in, one [`LessonRecord`] out.
//!
//! Extraction runs as an ordered list of rules over a shrinking buffer:
//! the first date token is taken out, then the first time token, and the
//! teacher field is picked from whatever text is left:
//!
//! 1. a double-quoted span, verbatim (trimmed);
//! 2. the most specific structured person name (surname with given name and
//!    patronymic, or surname with two initials, or a bare surname);
//! 3. the cleaned-up leftover text.
//!
//! Parsing is total: every input yields a record, fields that could not be
//! extracted are empty strings.

pub mod patterns;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::LessonRecord;
use patterns::{DATE, NAME, QUOTED, SEPARATORS, TIME, WHITESPACE};

/// Which rule produced the teacher field of a parsed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeacherRule {
    Quoted,
    StructuredName,
    Leftover,
}

impl TeacherRule {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Quoted => "quoted",
            Self::StructuredName => "structured_name",
            Self::Leftover => "leftover",
        }
    }
}

/// Stateless parser for schedule lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser;

impl LineParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn parse(&self, line: &str) -> LessonRecord {
        self.parse_with_rule(line).0
    }

    /// Parse a line and report which teacher rule fired.
    #[must_use]
    pub fn parse_with_rule(&self, line: &str) -> (LessonRecord, TeacherRule) {
        let text = line.trim();

        let (date, text) = take_first(&DATE, text);
        let (time, text) = take_first(&TIME, &text);
        let (teacher, rule) = extract_teacher(&text);

        debug!(
            "Parsed line: date={:?} time={:?} teacher={:?} via {}",
            date,
            time,
            teacher,
            rule.as_str()
        );

        (LessonRecord::new(date, time, teacher), rule)
    }
}

/// Parse one line with the default parser.
#[must_use]
pub fn parse_line(line: &str) -> LessonRecord {
    LineParser::new().parse(line)
}

/// Remove the first match of `re` from `text`.
///
/// Returns the matched text (empty when nothing matched) and the remainder.
fn take_first(re: &Regex, text: &str) -> (String, String) {
    re.find(text).map_or_else(
        || (String::new(), text.to_string()),
        |m| {
            let mut rest = String::with_capacity(text.len() - m.len());
            rest.push_str(&text[..m.start()]);
            rest.push_str(&text[m.end()..]);
            (m.as_str().to_string(), rest)
        },
    )
}

fn extract_teacher(text: &str) -> (String, TeacherRule) {
    let quoted = QUOTED
        .captures(text)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()).trim().to_string());

    let text = match quoted {
        Some(name) if !name.is_empty() => return (name, TeacherRule::Quoted),
        // An empty pair of quotes carries no name.
        Some(_) => QUOTED.replace(text, " ").into_owned(),
        None => text.to_string(),
    };

    if let Some(name) = most_specific_name(&text) {
        return (name, TeacherRule::StructuredName);
    }

    (clean_leftover(&text), TeacherRule::Leftover)
}

/// Pick the structured name match with the most components.
///
/// Candidates are the leftmost non-overlapping matches of the name pattern.
/// A match that swallowed a following word as its given name is also
/// retried from that word, so a capitalised word in front of a surname
/// with initials does not hide the initials. Ties go to the earliest
/// candidate.
fn most_specific_name(text: &str) -> Option<String> {
    let mut best: Option<(usize, &str)> = None;

    for caps in NAME.captures_iter(text) {
        let shifted = caps
            .name("given")
            .and_then(|given| NAME.captures_at(text, given.start()));

        for candidate in std::iter::once(caps).chain(shifted) {
            let score = name_specificity(&candidate);
            let Some(whole) = candidate.get(0) else { continue };
            if best.is_none_or(|(best_score, _)| score > best_score) {
                best = Some((score, whole.as_str()));
            }
        }
    }

    best.map(|(_, name)| name.trim().to_string())
}

fn name_specificity(caps: &Captures<'_>) -> usize {
    if caps.name("second_initial").is_some() {
        return 3;
    }
    1 + usize::from(caps.name("given").is_some()) + usize::from(caps.name("patronymic").is_some())
}

fn clean_leftover(text: &str) -> String {
    let text = SEPARATORS.replace_all(text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim()
        .trim_matches(|c| matches!(c, ' ' | '.' | '-'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> LessonRecord {
        parse_line(line)
    }

    #[test]
    fn test_full_line_with_initials() {
        let record = parse("15.03.2024 09:00 Смирнова А.Б.");
        assert_eq!(record.date(), "15.03.2024");
        assert_eq!(record.time(), "09:00");
        assert_eq!(record.teacher(), "Смирнова А.Б.");
    }

    #[test]
    fn test_bare_surname() {
        let record = parse("10.03.2024 14:30 Смирнов");
        assert_eq!(record, LessonRecord::new("10.03.2024", "14:30", "Смирнов"));
    }

    #[test]
    fn test_full_name_with_patronymic() {
        let record = parse("Иванов Иван Иванович 01.09.2024 8:30");
        assert_eq!(record.date(), "01.09.2024");
        assert_eq!(record.time(), "8:30");
        assert_eq!(record.teacher(), "Иванов Иван Иванович");
    }

    #[test]
    fn test_hyphenated_surname() {
        let record = parse("02.02.2024 12:00, Римский-Корсаков Н.А.");
        assert_eq!(record.teacher(), "Римский-Корсаков Н.А.");
    }

    #[test]
    fn test_latin_name() {
        let record = parse("02.02.2024 12:00 Smith John");
        assert_eq!(record.teacher(), "Smith John");
    }

    #[test]
    fn test_quoted_name_takes_precedence() {
        let (record, rule) = LineParser::new().parse_with_rule(r#"01.01.2024 10:00 "Петров Сидор""#);
        assert_eq!(record.teacher(), "Петров Сидор");
        assert_eq!(rule, TeacherRule::Quoted);
    }

    #[test]
    fn test_quoted_content_is_trimmed_and_kept_verbatim() {
        let record = parse(r#"01.01.2024 10:00 Лекция "  доц. петров  ""#);
        assert_eq!(record.teacher(), "доц. петров");
    }

    #[test]
    fn test_empty_quotes_fall_through() {
        let (record, rule) = LineParser::new().parse_with_rule(r#"01.01.2024 10:00 "" Петров"#);
        assert_eq!(record.teacher(), "Петров");
        assert_eq!(rule, TeacherRule::StructuredName);
    }

    #[test]
    fn test_name_found_among_punctuation() {
        let record = parse("01.01.2024 10:00 ауд. Б, Петров И.И.");
        assert_eq!(record.teacher(), "Петров И.И.");
    }

    #[test]
    fn test_most_specific_name_wins() {
        let record = parse("01.01.2024 10:00 Зал Б Петров Иван Иванович");
        assert_eq!(record.teacher(), "Петров Иван Иванович");
    }

    #[test]
    fn test_initials_behind_capitalised_word() {
        let record = parse("01.01.2024 10:00 Лекция Иванов И.О.");
        assert_eq!(record.teacher(), "Иванов И.О.");
    }

    #[test]
    fn test_two_word_name_not_split_by_retry() {
        let record = parse("01.01.2024 10:00 Лекция Иванов");
        assert_eq!(record.teacher(), "Лекция Иванов");
    }

    #[test]
    fn test_equally_specific_names_keep_first() {
        let record = parse("01.01.2024 10:00 Петров, Сидоров");
        assert_eq!(record.teacher(), "Петров");
    }

    #[test]
    fn test_leftover_fallback_cleans_punctuation() {
        let (record, rule) = LineParser::new().parse_with_rule("01.01.2024\t10:00 ;  доц.,\tпетров  -");
        assert_eq!(record.teacher(), "доц. петров");
        assert_eq!(rule, TeacherRule::Leftover);
    }

    #[test]
    fn test_missing_date_and_time() {
        let record = parse("Петров");
        assert_eq!(record.date(), "");
        assert_eq!(record.time(), "");
        assert_eq!(record.teacher(), "Петров");
    }

    #[test]
    fn test_impossible_date_kept_as_string() {
        let record = parse("31.02.2099 25:99 Петров");
        assert_eq!(record.date(), "31.02.2099");
        assert_eq!(record.time(), "25:99");
        assert!(record.calendar_date().is_none());
    }

    #[test]
    fn test_only_first_date_and_time_removed() {
        let record = parse("01.01.2024 10:00 02.02.2024 11:00");
        assert_eq!(record.date(), "01.01.2024");
        assert_eq!(record.time(), "10:00");
        assert_eq!(record.teacher(), "02.02.2024 11:00");
    }

    #[test]
    fn test_nothing_left_gives_empty_teacher() {
        let record = parse("01.01.2024 10:00 ...");
        assert_eq!(record.teacher(), "");
        assert_eq!(parse("   ").teacher(), "");
    }

    #[test]
    fn test_printed_form_round_trips() {
        let original = parse("15.03.2024 09:00 Смирнова А.Б.");
        let reparsed = parse(&original.to_string());
        assert_eq!(reparsed.date(), original.date());
        assert_eq!(reparsed.time(), original.time());
        assert_eq!(reparsed.teacher(), original.teacher());
    }
}
