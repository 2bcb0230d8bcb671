use crate::core::parse_with_report;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success, warning};
use crate::utils::input::read_lesson_text;
use crate::utils::table::Table;

/// Handle the `parse` command: list recognized lessons.
pub fn handle(input: &str) -> AppResult<()> {
    let text = read_lesson_text(input)?;
    if text.trim().is_empty() {
        return Err(AppError::MissingField("lesson text"));
    }

    let report = parse_with_report(&text);
    if report.lessons.is_empty() {
        return Err(AppError::NoLessons);
    }

    success(format!("Found {} lessons!", report.lessons.len()));
    if report.skipped_lines > 0 {
        warning(format!(
            "{} line(s) ignored: not in the expected format",
            report.skipped_lines
        ));
    }

    header("Lessons");
    let mut table = Table::new(&["#", "DATE", "START", "END", "MODE", "SUBJECT"]);
    for (i, l) in report.lessons.iter().enumerate() {
        table.add_row(&[
            (i + 1).to_string(),
            l.date.clone(),
            l.start_time.clone(),
            l.end_time.clone(),
            l.mode.clone(),
            l.subject.clone(),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
