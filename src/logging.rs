//! Logging capability used by the mail sender.

use std::error::Error;

use strum::IntoStaticStr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Stable event ids, so sender output can be filtered downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum MailLogEvent {
    SendMailException = 21001,
    SendMailInformation = 21002,
    SendMailError = 21003,
}

impl MailLogEvent {
    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Where the sender reports what happened.
pub trait MailLogger: Send + Sync {
    fn information(&self, message: &str);

    fn error(&self, message: &str);

    fn exception(&self, error: &(dyn Error + 'static));
}

/// Emits `tracing` events.
#[derive(Debug, Clone, Default)]
pub struct TracingMailLogger;

impl MailLogger for TracingMailLogger {
    fn information(&self, message: &str) {
        let event = MailLogEvent::SendMailInformation;
        tracing::info!(
            event_id = event.id(),
            event = event.name(),
            "HTMS{} MailSender: {}",
            event.id(),
            message
        );
    }

    fn error(&self, message: &str) {
        let event = MailLogEvent::SendMailError;
        tracing::error!(
            event_id = event.id(),
            event = event.name(),
            "HTMS{} MailSender: {}",
            event.id(),
            message
        );
    }

    fn exception(&self, error: &(dyn Error + 'static)) {
        let event = MailLogEvent::SendMailException;
        let mut chain = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push_str(": ");
            chain.push_str(&cause.to_string());
            source = cause.source();
        }

        tracing::error!(
            event_id = event.id(),
            event = event.name(),
            error = %chain,
            "HTMS{} MailSender: unhandled error",
            event.id()
        );
    }
}

/// Swallows everything. Used when no logger is supplied.
#[derive(Debug, Clone, Default)]
pub struct NoopMailLogger;

impl MailLogger for NoopMailLogger {
    fn information(&self, _message: &str) {}

    fn error(&self, _message: &str) {}

    fn exception(&self, _error: &(dyn Error + 'static)) {}
}

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .try_init()
}
