//! Lesson parser: free-text schedule → `Lesson` records.
//!
//! Expected line format:
//!
//! ```text
//! Subject - DD/MM/YYYY HH:MM - HH:MM - Mode
//! ```
//!
//! The subject is matched non-greedily, so a subject that itself contains
//! `" - DD/MM/YYYY HH:MM - "` is split at its first occurrence. That is a
//! known limitation and is left as-is.

use crate::models::Lesson;
use regex::Regex;
use std::sync::LazyLock;

static LESSON_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(.+?)\s-\s(\d{2}/\d{2}/\d{4})\s(\d{2}:\d{2})\s-\s(\d{2}:\d{2})\s-\s(.+)",
    )
    .expect("lesson line pattern is valid")
});

/// Outcome of a parse pass, with the count of non-blank lines that did not match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub lessons: Vec<Lesson>,
    pub skipped_lines: usize,
}

/// Parse the schedule text, keeping line order.
/// Blank and malformed lines are dropped silently.
pub fn parse_lesson_text(text: &str) -> Vec<Lesson> {
    parse_with_report(text).lessons
}

pub fn parse_with_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(lesson) => report.lessons.push(lesson),
            None => report.skipped_lines += 1,
        }
    }

    report
}

/// Match a single, already trimmed line.
pub fn parse_line(line: &str) -> Option<Lesson> {
    let caps = LESSON_LINE.captures(line)?;

    Some(Lesson {
        subject: caps[1].trim().to_string(),
        date: caps[2].to_string(),
        start_time: caps[3].to_string(),
        end_time: caps[4].to_string(),
        mode: caps[5].trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_line() {
        let lessons = parse_lesson_text("Matematica - 01/09/2025 09:00 - 11:00 - Online");
        assert_eq!(
            lessons,
            vec![Lesson {
                subject: "Matematica".into(),
                date: "01/09/2025".into(),
                start_time: "09:00".into(),
                end_time: "11:00".into(),
                mode: "Online".into(),
            }]
        );
    }

    #[test]
    fn subject_may_contain_separators() {
        let line = "AI: Intelligenza Artificiale 100% FAD - Modulo 1 - 21/08/2025 09:00 - 16:00 - Online";
        let lesson = parse_line(line).unwrap();
        assert_eq!(lesson.subject, "AI: Intelligenza Artificiale 100% FAD - Modulo 1");
        assert_eq!(lesson.date, "21/08/2025");
        assert_eq!(lesson.start_time, "09:00");
        assert_eq!(lesson.end_time, "16:00");
        assert_eq!(lesson.mode, "Online");
    }

    #[test]
    fn first_date_like_sequence_wins() {
        let line = "Storia - 02/02/2020 10:00 - 11:00 - recap - 01/09/2025 09:00 - 10:00 - Online";
        let lesson = parse_line(line).unwrap();
        assert_eq!(lesson.subject, "Storia");
        assert_eq!(lesson.date, "02/02/2020");
        assert_eq!(lesson.mode, "recap - 01/09/2025 09:00 - 10:00 - Online");
    }

    #[test]
    fn trims_subject_and_mode() {
        let lesson = parse_line("Fisica   - 01/09/2025 09:00 - 10:00 -   Ufficio  ").unwrap();
        assert_eq!(lesson.subject, "Fisica");
        assert_eq!(lesson.mode, "Ufficio");
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let text = "\n   \nCorso senza formato corretto\nChimica - 1/9/2025 09:00 - 10:00 - Online\n\
                    Chimica - 01/09/2025 09:00 - 10:00 - Online\n";
        let report = parse_with_report(text);
        assert_eq!(report.lessons.len(), 1);
        assert_eq!(report.skipped_lines, 2);
        assert_eq!(report.lessons[0].subject, "Chimica");
    }

    #[test]
    fn keeps_line_order_and_handles_crlf() {
        let text = "B - 02/09/2025 09:00 - 10:00 - Online\r\nA - 01/09/2025 09:00 - 10:00 - Ufficio\r\n";
        let lessons = parse_lesson_text(text);
        let subjects: Vec<_> = lessons.iter().map(|l| l.subject.as_str()).collect();
        assert_eq!(subjects, ["B", "A"]);
        assert_eq!(lessons[1].mode, "Ufficio");
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(parse_lesson_text("").is_empty());
        assert_eq!(parse_with_report("  \n\n").skipped_lines, 0);
    }

    #[test]
    fn missing_mode_does_not_match() {
        assert!(parse_line("Corso - 01/09/2025 09:00 - 10:00 - ").is_none());
        assert!(parse_line("Corso - 01/09/2025 09:00 - 10:00").is_none());
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = "X - 01/09/2025 09:00 - 12:00 - Online\nY - 02/09/2025 14:00 - 15:30 - Ufficio";
        assert_eq!(parse_with_report(text), parse_with_report(text));
    }
}
