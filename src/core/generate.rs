// src/core/generate.rs

use crate::core::expander::generate_hourly_rows;
use crate::core::parser::parse_with_report;
use crate::errors::{AppError, AppResult};
use crate::models::{HourlyRow, Lesson};

/// Everything produced by one generation request.
#[derive(Debug, Clone)]
pub struct Generation {
    pub lessons: Vec<Lesson>,
    pub skipped_lines: usize,
    pub rows: Vec<HourlyRow>,
}

/// Text → lessons → rows, with the same checks the input form performs.
pub struct GenerateLogic;

impl GenerateLogic {
    /// Run the full pipeline.
    ///
    /// - blank `text`, `section_id` or `tax_code` → `MissingField`
    /// - no recognizable line → `NoLessons`
    /// - malformed time → `MalformedTime` (no rows at all)
    ///
    /// An empty `rows` vector with lessons present is a valid outcome.
    pub fn run(text: &str, section_id: &str, tax_code: &str) -> AppResult<Generation> {
        if text.trim().is_empty() {
            return Err(AppError::MissingField("lesson text"));
        }
        if section_id.trim().is_empty() {
            return Err(AppError::MissingField("section id"));
        }
        if tax_code.trim().is_empty() {
            return Err(AppError::MissingField("tax code"));
        }

        let report = parse_with_report(text);
        if report.lessons.is_empty() {
            return Err(AppError::NoLessons);
        }

        let rows = generate_hourly_rows(&report.lessons, section_id, tax_code)?;

        Ok(Generation {
            lessons: report.lessons,
            skipped_lines: report.skipped_lines,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_order_matches_form() {
        assert!(matches!(
            GenerateLogic::run("  ", "", ""),
            Err(AppError::MissingField("lesson text"))
        ));
        assert!(matches!(
            GenerateLogic::run("x", " ", ""),
            Err(AppError::MissingField("section id"))
        ));
        assert!(matches!(
            GenerateLogic::run("x", "1", ""),
            Err(AppError::MissingField("tax code"))
        ));
    }

    #[test]
    fn unrecognized_text_is_no_lessons() {
        assert!(matches!(
            GenerateLogic::run("Corso senza formato corretto", "1", "CF"),
            Err(AppError::NoLessons)
        ));
    }

    #[test]
    fn lessons_without_rows_are_not_an_error() {
        let g = GenerateLogic::run("Corso - 01/09/2025 09:00 - 09:00 - Online", "1", "CF").unwrap();
        assert_eq!(g.lessons.len(), 1);
        assert!(g.rows.is_empty());
    }

    #[test]
    fn counts_skipped_lines() {
        let text = "Matematica - 01/09/2025 09:00 - 11:00 - Online\nrubbish\n\n\
                    Riunione - 01/09/2025 12:00 - 15:00 - Ufficio";
        let g = GenerateLogic::run(text, "141230", "MLSNRS97S25F205C").unwrap();
        assert_eq!(g.lessons.len(), 2);
        assert_eq!(g.skipped_lines, 1);
        assert_eq!(g.rows.len(), 4);
    }
}
