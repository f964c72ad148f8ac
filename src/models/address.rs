use std::fmt;

use serde::{Deserialize, Serialize};

/// E-mail address with an optional display name.
///
/// `Default` is the zero value (empty address, no name), which is never a
/// valid sender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.email.trim().is_empty()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.email),
            None => f.write_str(&self.email),
        }
    }
}

impl From<&str> for EmailAddress {
    fn from(email: &str) -> Self {
        Self::new(email)
    }
}

impl From<String> for EmailAddress {
    fn from(email: String) -> Self {
        Self::new(email)
    }
}

impl From<&String> for EmailAddress {
    fn from(email: &String) -> Self {
        Self::new(email.as_str())
    }
}

impl From<&EmailAddress> for EmailAddress {
    fn from(address: &EmailAddress) -> Self {
        address.clone()
    }
}

/// Anything that resolves to an ordered list of recipients: a single
/// address or bare string, or a collection of either.
pub trait IntoRecipients {
    fn into_recipients(self) -> Vec<EmailAddress>;
}

impl IntoRecipients for EmailAddress {
    fn into_recipients(self) -> Vec<EmailAddress> {
        vec![self]
    }
}

impl IntoRecipients for &EmailAddress {
    fn into_recipients(self) -> Vec<EmailAddress> {
        vec![self.clone()]
    }
}

impl IntoRecipients for &str {
    fn into_recipients(self) -> Vec<EmailAddress> {
        vec![EmailAddress::new(self)]
    }
}

impl IntoRecipients for String {
    fn into_recipients(self) -> Vec<EmailAddress> {
        vec![EmailAddress::new(self)]
    }
}

impl<T: Into<EmailAddress>> IntoRecipients for Vec<T> {
    fn into_recipients(self) -> Vec<EmailAddress> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<EmailAddress>, const N: usize> IntoRecipients for [T; N] {
    fn into_recipients(self) -> Vec<EmailAddress> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<'a, T> IntoRecipients for &'a [T]
where
    &'a T: Into<EmailAddress>,
{
    fn into_recipients(self) -> Vec<EmailAddress> {
        self.iter().map(Into::into).collect()
    }
}
