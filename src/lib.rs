pub mod config;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod mail;
pub mod models;

pub use config::SenderOptions;
pub use error::{ConfigError, SendFailure, SendResult};
pub use mail::{MailSender, MailTransport, SendGridTransport};
pub use models::{Currency, EmailAddress};
