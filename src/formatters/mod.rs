//! Display helpers for building template data.
//!
//! Everything here is pure: same input, same output.

pub mod amount;
pub mod content;

pub use amount::format_currency_amount;
pub use content::{format_date_time, format_enum_label, format_passenger_name};
