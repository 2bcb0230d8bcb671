//! Hourly row expander: one `HourlyRow` per clock-hour slot of each lesson.

use crate::errors::{AppError, AppResult};
use crate::models::{HourlyRow, Lesson};
use crate::utils::time::{format_hhmm, to_minutes};

/// Slots whose start hour equals this value are never reported.
pub const LUNCH_HOUR: u32 = 13;

const SLOT_MINUTES: u32 = 60;

/// Expand lessons into hourly rows.
///
/// `section_id` and `tax_code` are copied verbatim into every row and must
/// not be blank. A malformed time in any lesson aborts the whole run.
pub fn generate_hourly_rows(
    lessons: &[Lesson],
    section_id: &str,
    tax_code: &str,
) -> AppResult<Vec<HourlyRow>> {
    if section_id.trim().is_empty() {
        return Err(AppError::MissingField("section id"));
    }
    if tax_code.trim().is_empty() {
        return Err(AppError::MissingField("tax code"));
    }

    let mut rows = Vec::new();
    for lesson in lessons {
        expand_lesson(lesson, section_id, tax_code, &mut rows)?;
    }
    Ok(rows)
}

fn expand_lesson(
    lesson: &Lesson,
    section_id: &str,
    tax_code: &str,
    out: &mut Vec<HourlyRow>,
) -> AppResult<()> {
    let start = to_minutes(&lesson.start_time, "start_time")?;
    let end = to_minutes(&lesson.end_time, "end_time")?;
    let mode = lesson.delivery_mode();

    let mut cursor = start;
    while cursor < end {
        // the cursor always moves a full slot, even after a clamped one
        let slot_end = (cursor + SLOT_MINUTES).min(end);

        if cursor / 60 != LUNCH_HOUR {
            out.push(HourlyRow {
                section_id: section_id.to_string(),
                date: lesson.date.clone(),
                duration_hours: "1".to_string(),
                slot_start: format_hhmm(cursor),
                slot_end: format_hhmm(slot_end),
                category_code: mode.category_code().to_string(),
                tax_code: tax_code.to_string(),
                subject: lesson.subject.clone(),
                content: lesson.subject.clone(),
                site_code: mode.site_code().to_string(),
            });
        }

        cursor += SLOT_MINUTES;
    }

    Ok(())
}
