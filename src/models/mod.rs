pub mod delivery_mode;
pub mod hourly_row;
pub mod lesson;

pub use delivery_mode::DeliveryMode;
pub use hourly_row::HourlyRow;
pub use lesson::Lesson;
