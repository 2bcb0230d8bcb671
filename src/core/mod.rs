pub mod expander;
pub mod generate;
pub mod parser;

pub use expander::generate_hourly_rows;
pub use generate::{GenerateLogic, Generation};
pub use parser::{ParseReport, parse_lesson_text, parse_with_report};
