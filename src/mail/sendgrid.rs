use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{MailTransport, ProviderResponse, TemplatedEmail};
use crate::error::TransportError;
use crate::models::EmailAddress;

pub const DEFAULT_API_BASE: &str = "https://api.sendgrid.com";

/// SendGrid v3 Mail Send client.
#[derive(Clone)]
pub struct SendGridTransport {
    client: Client,
    api_key: String,
    api_base: String,
}

#[derive(Serialize)]
struct Payload<'a> {
    from: &'a EmailAddress,
    personalizations: [Personalization<'a>; 1],
    template_id: &'a str,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [&'a EmailAddress; 1],
    dynamic_template_data: &'a Map<String, Value>,
}

impl SendGridTransport {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at another host (a regional endpoint, or a test server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v3/mail/send", self.api_base)
    }
}

#[async_trait]
impl MailTransport for SendGridTransport {
    async fn send(&self, email: &TemplatedEmail) -> Result<ProviderResponse, TransportError> {
        let payload = Payload {
            from: &email.from,
            personalizations: [Personalization {
                to: [&email.to],
                dynamic_template_data: &email.template_data,
            }],
            template_id: &email.template_id,
        };

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        tracing::debug!(template_id = %email.template_id, %status, "SendGrid responded");

        Ok(ProviderResponse { status, body })
    }
}
