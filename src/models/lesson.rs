use crate::models::delivery_mode::DeliveryMode;

/// One entry recognized in the schedule text.
///
/// All fields are kept as text: the date is only shape-checked by the
/// parser, times are validated later by the expander.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub subject: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub mode: String,
}

impl Lesson {
    pub fn delivery_mode(&self) -> DeliveryMode {
        DeliveryMode::from_mode(&self.mode)
    }
}
