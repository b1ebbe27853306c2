// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! Outbound mail dispatch.
//!
//! The handler depends only on the [`Mailer`] capability: given a composed
//! notification, attempt delivery and report success or failure. The
//! production implementation is [`ResendMailer`], an adapter for the Resend
//! transactional email API; tests inject their own implementations.
//!
//! There is no retry logic. A rejected send surfaces as an error for that
//! request and nothing more.

use crate::config::MailConfig;
use crate::notify::NotificationMessage;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Resend API endpoint.
const API_BASE_URL: &str = "https://api.resend.com";

/// Bound on the provider call so a slow provider cannot hang the handler.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Dispatch error taxonomy. Variants carry provider detail for the server
/// log; none of it reaches an HTTP response body.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("mail provider API key is not configured")]
    NotConfigured,

    #[error("mail provider rejected the send: {status} {detail}")]
    Provider { status: u16, detail: String },

    #[error("mail transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Capability to deliver a composed notification.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DispatchError>;
}

/// Wire request for the Resend `POST /emails` endpoint.
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Mail dispatcher backed by the Resend transactional email API.
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: Option<String>,
    from: String,
    base_url: String,
}

impl ResendMailer {
    /// Create a dispatcher from the mail configuration.
    ///
    /// A missing API key is not an error here: the service keeps serving
    /// and each send attempt fails with [`DispatchError::NotConfigured`].
    pub fn new(config: &MailConfig) -> Result<Self, DispatchError> {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            from: config.from_address(),
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DispatchError> {
        // Credential check comes before any network traffic.
        let api_key = self.api_key.as_deref().ok_or(DispatchError::NotConfigured)?;

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(&SendEmailRequest {
                from: &self.from,
                to: &message.recipient,
                subject: &message.subject,
                html: &message.html,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(recipient = %message.recipient, "notification dispatched");
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            Err(DispatchError::Provider {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mail_config(api_key: Option<&str>) -> MailConfig {
        MailConfig {
            api_key: api_key.map(str::to_string),
            domain: "arturomorgadanes.com".to_string(),
        }
    }

    fn message() -> NotificationMessage {
        NotificationMessage {
            recipient: "info@arturomorgadanes.es".to_string(),
            subject: "Nueva solicitud de Ana".to_string(),
            html: "<p>Ana</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn delivers_through_the_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test_key"))
            .and(body_partial_json(json!({
                "from": "Web <noreply@arturomorgadanes.com>",
                "to": "info@arturomorgadanes.es",
                "subject": "Nueva solicitud de Ana",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "e-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let mailer = ResendMailer::new(&mail_config(Some("re_test_key")))
            .unwrap()
            .with_base_url(server.uri());

        mailer.send(&message()).await.unwrap();
    }

    #[tokio::test]
    async fn provider_rejection_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"message": "invalid to"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mailer = ResendMailer::new(&mail_config(Some("re_test_key")))
            .unwrap()
            .with_base_url(server.uri());

        let err = mailer.send(&message()).await.unwrap_err();
        match err {
            DispatchError::Provider { status, detail } => {
                assert_eq!(status, 422);
                assert!(detail.contains("invalid to"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mailer = ResendMailer::new(&mail_config(None))
            .unwrap()
            .with_base_url(server.uri());

        let err = mailer.send(&message()).await.unwrap_err();
        assert!(matches!(err, DispatchError::NotConfigured));
    }
}
