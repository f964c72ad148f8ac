pub mod sendgrid;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::SenderOptions;
use crate::error::{combine, Result, SendFailure, SendResult, TemplateDataError, TransportError};
use crate::logging::{MailLogger, NoopMailLogger};
use crate::models::{EmailAddress, IntoRecipients};

pub use sendgrid::SendGridTransport;

pub const NO_RECIPIENTS: &str = "No recipient addresses provided";
pub const UNHANDLED_ERROR: &str = "Unhandled error occurred while sending an e-mail.";

/// One templated message addressed to a single recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatedEmail {
    pub template_id: String,
    pub from: EmailAddress,
    pub to: EmailAddress,
    pub template_data: Map<String, Value>,
}

/// What the provider answered.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Sends a single templated e-mail through a provider.
///
/// An `Err` means the provider could not be reached at all; a rejection is
/// an `Ok` response with a non-accepted status.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &TemplatedEmail) -> std::result::Result<ProviderResponse, TransportError>;
}

/// Templated mail sender.
///
/// Recipients are processed one by one in the order given; every call
/// reports through its returned [`SendResult`] and never panics or errors
/// out otherwise.
#[derive(Clone)]
pub struct MailSender {
    options: SenderOptions,
    transport: Arc<dyn MailTransport>,
    logger: Arc<dyn MailLogger>,
}

impl MailSender {
    /// Validates `options` up front. Without a logger nothing is logged.
    pub fn new(
        options: SenderOptions,
        transport: Arc<dyn MailTransport>,
        logger: Option<Arc<dyn MailLogger>>,
    ) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            options,
            transport,
            logger: logger.unwrap_or_else(|| Arc::new(NoopMailLogger)),
        })
    }

    /// Sender backed by SendGrid, authenticated with `options.api_key`.
    pub fn sendgrid(options: SenderOptions, logger: Option<Arc<dyn MailLogger>>) -> Result<Self> {
        let transport = Arc::new(SendGridTransport::new(options.api_key.clone()));

        Self::new(options, transport, logger)
    }

    pub fn options(&self) -> &SenderOptions {
        &self.options
    }

    /// Send `template_id` with only the base URL as template data.
    pub async fn send(&self, template_id: &str, recipients: impl IntoRecipients) -> SendResult {
        self.send_with_data(template_id, recipients, &Value::Null).await
    }

    /// Send `template_id` to each recipient with `message_data` merged into
    /// the template data.
    #[tracing::instrument(name = "send_mail", skip_all, fields(template_id = %template_id))]
    pub async fn send_with_data<D>(
        &self,
        template_id: &str,
        recipients: impl IntoRecipients,
        message_data: &D,
    ) -> SendResult
    where
        D: Serialize + ?Sized,
    {
        let recipients = recipients.into_recipients();
        if recipients.is_empty() {
            return Err(SendFailure::new(NO_RECIPIENTS));
        }

        let template_data = match self.template_data(message_data) {
            Ok(data) => data,
            Err(e) => {
                self.logger.exception(&e);
                return Err(SendFailure::new(UNHANDLED_ERROR));
            }
        };

        let mut email = TemplatedEmail {
            template_id: template_id.to_string(),
            from: self.options.sender_address.clone(),
            to: EmailAddress::default(),
            template_data,
        };

        let mut result = Ok(());
        for recipient in recipients {
            email.to = recipient;

            let response = match self.transport.send(&email).await {
                Ok(response) => response,
                Err(e) => {
                    self.logger.exception(&e);
                    return Err(SendFailure::new(UNHANDLED_ERROR));
                }
            };

            if response.status == StatusCode::ACCEPTED {
                self.logger
                    .information(&format!("{} successfully e-mailed to {}", template_id, email.to));
            } else {
                let failure = format!(
                    "Could not send an e-mail {} to {}, a server responded: '{}' with the status code '{}'",
                    template_id, email.to, response.body, response.status
                );
                self.logger.error(&failure);
                result = combine(result, Err(SendFailure::new(failure)));
            }
        }

        result
    }

    /// Template fields for one call: the top-level fields of `message_data`
    /// plus the configured base URL, which always wins on a name clash.
    pub fn template_data<D>(&self, message_data: &D) -> std::result::Result<Map<String, Value>, TemplateDataError>
    where
        D: Serialize + ?Sized,
    {
        let key = &self.options.base_url_template_key;
        let base_url = Value::String(self.options.base_url.trim().to_string());

        let mut data = Map::new();
        data.insert(key.clone(), base_url.clone());

        match serde_json::to_value(message_data)? {
            Value::Null => {}
            Value::Object(fields) => data.extend(fields),
            Value::Bool(_) => return Err(TemplateDataError::NotAnObject("a boolean")),
            Value::Number(_) => return Err(TemplateDataError::NotAnObject("a number")),
            Value::String(_) => return Err(TemplateDataError::NotAnObject("a string")),
            Value::Array(_) => return Err(TemplateDataError::NotAnObject("an array")),
        }

        data.insert(key.clone(), base_url);
        Ok(data)
    }
}
