use std::env;

use reqwest::Url;
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::models::EmailAddress;

pub const DEFAULT_BASE_URL_TEMPLATE_KEY: &str = "baseUrl";

/// Sender configuration, built once at startup and read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct SenderOptions {
    pub api_key: String,
    /// Public site URL handed to every template.
    pub base_url: String,
    /// Template field that receives `base_url`.
    #[serde(default = "default_base_url_template_key")]
    pub base_url_template_key: String,
    pub sender_address: EmailAddress,
}

fn default_base_url_template_key() -> String {
    DEFAULT_BASE_URL_TEMPLATE_KEY.to_string()
}

impl SenderOptions {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        sender_address: EmailAddress,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            base_url_template_key: default_base_url_template_key(),
            sender_address,
        }
    }

    /// Load options from the environment (and `.env` if present).
    ///
    /// Required: `SENDGRID_API_KEY`, `MAIL_BASE_URL`, `MAIL_SENDER_ADDRESS`.
    /// Optional: `MAIL_SENDER_NAME`, `MAIL_BASE_URL_TEMPLATE_KEY`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        fn required(key: &'static str) -> Result<String> {
            env::var(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingEnv(key))
        }

        let options = SenderOptions {
            api_key: required("SENDGRID_API_KEY")?,
            base_url: required("MAIL_BASE_URL")?,
            base_url_template_key: env::var("MAIL_BASE_URL_TEMPLATE_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(default_base_url_template_key),
            sender_address: EmailAddress {
                email: required("MAIL_SENDER_ADDRESS")?,
                name: env::var("MAIL_SENDER_NAME").ok().filter(|v| !v.is_empty()),
            },
        };
        options.validate()?;

        Ok(options)
    }

    /// Reject options a sender cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(base_url.to_string(), e.to_string()))?;

        if self.sender_address == EmailAddress::default() || self.sender_address.is_blank() {
            return Err(ConfigError::MissingSenderAddress);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_options() -> SenderOptions {
        SenderOptions::new(
            "key",
            "https://base-url",
            EmailAddress::new("sender@example.com"),
        )
    }

    #[test]
    fn test_valid_options() {
        let options = test_options();
        assert_eq!(options.base_url_template_key, "baseUrl");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_blank_api_key() {
        let options = SenderOptions {
            api_key: "  ".to_string(),
            ..test_options()
        };
        assert!(matches!(options.validate(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_missing_and_invalid_base_url() {
        let options = SenderOptions {
            base_url: String::new(),
            ..test_options()
        };
        assert!(matches!(options.validate(), Err(ConfigError::MissingBaseUrl)));

        let options = SenderOptions {
            base_url: "not a url".to_string(),
            ..test_options()
        };
        assert!(matches!(
            options.validate(),
            Err(ConfigError::InvalidBaseUrl(..))
        ));
    }

    #[test]
    fn test_zero_sender_address() {
        let options = SenderOptions {
            sender_address: EmailAddress::default(),
            ..test_options()
        };
        assert!(matches!(
            options.validate(),
            Err(ConfigError::MissingSenderAddress)
        ));
    }

    // Environment is process-global, so every from_env case runs in this one test.
    #[test]
    fn test_from_env() {
        const VARS: [&str; 5] = [
            "SENDGRID_API_KEY",
            "MAIL_BASE_URL",
            "MAIL_BASE_URL_TEMPLATE_KEY",
            "MAIL_SENDER_ADDRESS",
            "MAIL_SENDER_NAME",
        ];
        let clear = || VARS.iter().for_each(|key| env::remove_var(key));

        clear();
        env::set_var("SENDGRID_API_KEY", "SG.key");
        env::set_var("MAIL_BASE_URL", "https://booking.example.com");
        env::set_var("MAIL_SENDER_ADDRESS", "noreply@example.com");

        let options = SenderOptions::from_env().expect("Should load from env");
        assert_eq!(options.api_key, "SG.key");
        assert_eq!(options.base_url, "https://booking.example.com");
        assert_eq!(options.base_url_template_key, DEFAULT_BASE_URL_TEMPLATE_KEY);
        assert_eq!(options.sender_address, EmailAddress::new("noreply@example.com"));

        env::set_var("MAIL_BASE_URL_TEMPLATE_KEY", "siteUrl");
        env::set_var("MAIL_SENDER_NAME", "Bookings");
        let options = SenderOptions::from_env().expect("Should load from env");
        assert_eq!(options.base_url_template_key, "siteUrl");
        assert_eq!(
            options.sender_address,
            EmailAddress::with_name("noreply@example.com", "Bookings")
        );

        env::set_var("SENDGRID_API_KEY", "   ");
        assert!(matches!(
            SenderOptions::from_env(),
            Err(ConfigError::MissingEnv("SENDGRID_API_KEY"))
        ));

        env::remove_var("SENDGRID_API_KEY");
        assert!(matches!(
            SenderOptions::from_env(),
            Err(ConfigError::MissingEnv("SENDGRID_API_KEY"))
        ));

        env::set_var("SENDGRID_API_KEY", "SG.key");
        env::remove_var("MAIL_SENDER_ADDRESS");
        assert!(matches!(
            SenderOptions::from_env(),
            Err(ConfigError::MissingEnv("MAIL_SENDER_ADDRESS"))
        ));

        env::set_var("MAIL_SENDER_ADDRESS", "noreply@example.com");
        env::set_var("MAIL_BASE_URL", "not a url");
        assert!(matches!(
            SenderOptions::from_env(),
            Err(ConfigError::InvalidBaseUrl(..))
        ));

        clear();
    }

    #[test]
    fn test_deserialize_defaults_template_key() {
        let options: SenderOptions = serde_json::from_value(serde_json::json!({
            "api_key": "key",
            "base_url": "https://base-url",
            "sender_address": { "email": "sender@example.com", "name": "Sender" }
        }))
        .expect("Should deserialize options");

        assert_eq!(options.base_url_template_key, DEFAULT_BASE_URL_TEMPLATE_KEY);
        assert_eq!(
            options.sender_address,
            EmailAddress::with_name("sender@example.com", "Sender")
        );
    }
}
