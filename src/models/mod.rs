pub mod address;
pub mod currency;

pub use address::{EmailAddress, IntoRecipients};
pub use currency::Currency;
