//! reqwest-backed transport speaking the `/api/chat/` contract.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use codechat_core::error::{CodechatError, ExchangeFailure};
use codechat_core::protocol::{ChatReply, ChatRequest};

use crate::transport::ChatTransport;

/// HTTP transport posting JSON to `{base_url}/api/chat/`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport with no request timeout.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: chat_endpoint(base_url),
        }
    }

    /// Build a transport whose requests fail after `timeout`.
    ///
    /// An elapsed timeout surfaces as an ordinary transport failure.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, CodechatError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CodechatError::Http(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: chat_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatReply, ExchangeFailure> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ExchangeFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExchangeFailure::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ExchangeFailure::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ExchangeFailure::Malformed(e.to_string()))
    }
}

fn chat_endpoint(base_url: &str) -> String {
    format!("{}/api/chat/", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        assert_eq!(
            HttpTransport::new("http://localhost:8001").endpoint(),
            "http://localhost:8001/api/chat/"
        );
        assert_eq!(
            HttpTransport::new("http://localhost:8001/").endpoint(),
            "http://localhost:8001/api/chat/"
        );
    }

    #[test]
    fn test_with_timeout_builds() {
        let transport =
            HttpTransport::with_timeout("http://localhost:1", Some(Duration::from_secs(5))).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:1/api/chat/");
    }
}
