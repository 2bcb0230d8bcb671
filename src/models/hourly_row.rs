// src/models/hourly_row.rs

use serde::Serialize;

/// Flat record for one reportable hour of a lesson.
///
/// Serde renames match the column names expected by the reporting system,
/// so CSV/JSON exports get the right header for free.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HourlyRow {
    #[serde(rename = "ID_SEZIONE")]
    pub section_id: String,
    #[serde(rename = "DATA LEZIONE")]
    pub date: String,
    #[serde(rename = "TOTALE_ORE")]
    pub duration_hours: String,
    #[serde(rename = "ORA_INIZIO")]
    pub slot_start: String,
    #[serde(rename = "ORA_FINE")]
    pub slot_end: String,
    #[serde(rename = "TIPOLOGIA")]
    pub category_code: String,
    #[serde(rename = "CODICE FISCALE DOCENTE")]
    pub tax_code: String,
    #[serde(rename = "MATERIA")]
    pub subject: String,
    #[serde(rename = "CONTENUTI MATERIA")]
    pub content: String,
    #[serde(rename = "SVOLGIMENTO SEDE LEZIONE")]
    pub site_code: String,
}

/// Header for CSV / JSON / XLSX / preview table
pub fn get_headers() -> Vec<&'static str> {
    vec![
        "ID_SEZIONE",
        "DATA LEZIONE",
        "TOTALE_ORE",
        "ORA_INIZIO",
        "ORA_FINE",
        "TIPOLOGIA",
        "CODICE FISCALE DOCENTE",
        "MATERIA",
        "CONTENUTI MATERIA",
        "SVOLGIMENTO SEDE LEZIONE",
    ]
}

impl HourlyRow {
    /// Cells in header order.
    pub fn to_cells(&self) -> Vec<&str> {
        vec![
            self.section_id.as_str(),
            self.date.as_str(),
            self.duration_hours.as_str(),
            self.slot_start.as_str(),
            self.slot_end.as_str(),
            self.category_code.as_str(),
            self.tax_code.as_str(),
            self.subject.as_str(),
            self.content.as_str(),
            self.site_code.as_str(),
        ]
    }
}
