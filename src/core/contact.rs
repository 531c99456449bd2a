//! Outbound contact form. With a form-relay endpoint configured the message
//! is POSTed there; otherwise a `mailto:` draft is composed for the visitor
//! to send themselves.

use crate::utils::error::{CmsError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string};
use reqwest::Client;
use serde::Serialize;

pub const RECIPIENT_EMAIL: &str = "hello@vendaa.co";
const MAIL_SUBJECT: &str = "Contact from Vendaa website";

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    /// Relay hint so replies go to the visitor, not the relay.
    #[serde(rename = "_replyto")]
    pub reply_to: String,
}

impl ContactMessage {
    pub fn new(name: String, email: String, company: String, message: String) -> Self {
        let reply_to = email.clone();
        Self {
            name,
            email,
            company,
            message,
            reply_to,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_empty_string("Name", &self.name)?;
        validate_email("Email", &self.email)?;
        validate_non_empty_string("Message", &self.message)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum ContactOutcome {
    /// Relay accepted the message.
    Relayed,
    /// No relay configured; the visitor sends this draft themselves.
    MailtoDraft(String),
}

#[derive(Debug, Clone)]
pub struct ContactRelay {
    endpoint: Option<String>,
    client: Client,
}

impl ContactRelay {
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint.filter(|e| !e.trim().is_empty());
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    pub async fn submit(&self, message: &ContactMessage) -> Result<ContactOutcome> {
        message.validate()?;

        let Some(endpoint) = &self.endpoint else {
            return Ok(ContactOutcome::MailtoDraft(mailto_draft(message)));
        };

        tracing::debug!("Relaying contact message to {}", endpoint);
        let response = self.client.post(endpoint).json(message).send().await?;
        if !response.status().is_success() {
            return Err(CmsError::remote(format!(
                "form relay rejected the message ({})",
                response.status()
            )));
        }
        Ok(ContactOutcome::Relayed)
    }
}

fn mailto_draft(message: &ContactMessage) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\nCompany: {}\n\nMessage:\n{}",
        message.name, message.email, message.company, message.message
    );
    format!(
        "mailto:{}?subject={}&body={}",
        RECIPIENT_EMAIL,
        percent_encode(MAIL_SUBJECT),
        percent_encode(&body)
    )
}

/// Minimal percent-encoding for mailto query values.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn message() -> ContactMessage {
        ContactMessage::new(
            "Jordan Doe".to_string(),
            "jordan@example.com".to_string(),
            "Acme".to_string(),
            "We need 200 onboarding kits.".to_string(),
        )
    }

    #[tokio::test]
    async fn test_relay_posts_message() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/f/abc123")
                .json_body_partial(r#"{"_replyto": "jordan@example.com"}"#);
            then.status(200);
        });

        let relay = ContactRelay::new(Some(server.url("/f/abc123")));
        let outcome = relay.submit(&message()).await.unwrap();

        api_mock.assert();
        assert!(matches!(outcome, ContactOutcome::Relayed));
    }

    #[tokio::test]
    async fn test_relay_rejection_is_error_not_mailto() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/f/abc123");
            then.status(422);
        });

        let relay = ContactRelay::new(Some(server.url("/f/abc123")));
        let err = relay.submit(&message()).await.unwrap_err();
        assert!(matches!(err, CmsError::RemoteError { .. }));
    }

    #[tokio::test]
    async fn test_no_relay_composes_mailto_draft() {
        let relay = ContactRelay::new(None);
        let outcome = relay.submit(&message()).await.unwrap();

        let ContactOutcome::MailtoDraft(draft) = outcome else {
            panic!("expected mailto draft");
        };
        assert!(draft.starts_with(&format!("mailto:{}?subject=", RECIPIENT_EMAIL)));
        assert!(draft.contains("Jordan%20Doe"));
        assert!(draft.contains("Acme"));
    }

    #[tokio::test]
    async fn test_blank_relay_endpoint_counts_as_unconfigured() {
        let relay = ContactRelay::new(Some("   ".to_string()));
        let outcome = relay.submit(&message()).await.unwrap();
        assert!(matches!(outcome, ContactOutcome::MailtoDraft(_)));
    }

    #[tokio::test]
    async fn test_invalid_message_blocked_before_any_network() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/f/abc123");
            then.status(200);
        });

        let relay = ContactRelay::new(Some(server.url("/f/abc123")));
        let mut bad = message();
        bad.email = "not-an-email".to_string();

        assert!(relay.submit(&bad).await.is_err());
        api_mock.assert_hits(0);
    }
}
