use chrono::{DateTime, Utc};
use strum::EnumMessage;

/// `2024.03.05 02:30 UTC`. The hour is on a 12-hour clock and carries no
/// AM/PM marker.
pub fn format_date_time(date_time: &DateTime<Utc>) -> String {
    date_time.format("%Y.%m.%d %I:%M UTC").to_string()
}

/// Human-readable label of an enum variant: its `#[strum(message = "...")]`
/// if one is set, otherwise the variant name.
pub fn format_enum_label<T>(value: T) -> String
where
    T: EnumMessage + Into<&'static str>,
{
    match value.get_message() {
        Some(message) => message.to_string(),
        None => {
            let name: &'static str = value.into();
            name.to_string()
        }
    }
}

/// Mask a passenger's first name down to an initial.
///
/// A one-letter (or empty) first name is hidden entirely behind `*`.
pub fn format_passenger_name(first_name: &str, last_name: &str, title: Option<&str>) -> String {
    let mut chars = first_name.chars();
    let masked = match (chars.next(), chars.next()) {
        (Some(initial), Some(_)) => initial.to_string(),
        _ => "*".to_string(),
    };

    match title {
        None => format!("{}. {}", masked, last_name),
        Some(title) => format!("{}. {} {}", title, masked, last_name),
    }
}
