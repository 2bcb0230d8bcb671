// src/export/naming.rs

use crate::export::ExportFormat;
use chrono::NaiveDateTime;

/// Default output name: `lezioni_<section>_<YYYYmmdd_HHMMSS>.<ext>`.
pub fn default_file_name(section_id: &str, now: NaiveDateTime, format: ExportFormat) -> String {
    let safe: String = section_id
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();

    format!(
        "lezioni_{}_{}.{}",
        safe,
        now.format("%Y%m%d_%H%M%S"),
        format.as_str()
    )
}
