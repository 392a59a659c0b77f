//! Transport seam between the coordinator and the remote chat endpoint.

use async_trait::async_trait;

use codechat_core::error::ExchangeFailure;
use codechat_core::protocol::{ChatReply, ChatRequest};

/// Performs one remote exchange.
///
/// Implementations fold every failure mode (unreachable host, non-success
/// status, undecodable body) into an [`ExchangeFailure`].
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatReply, ExchangeFailure>;
}

#[async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for std::sync::Arc<T> {
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatReply, ExchangeFailure> {
        (**self).exchange(request).await
    }
}

/// Transport that always fails as if the network were down.
pub struct OfflineTransport;

#[async_trait]
impl ChatTransport for OfflineTransport {
    async fn exchange(&self, _request: &ChatRequest) -> Result<ChatReply, ExchangeFailure> {
        Err(ExchangeFailure::Transport("offline".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codechat_core::types::Category;
    use std::sync::Arc;

    fn request() -> ChatRequest {
        ChatRequest {
            message: "привет".into(),
            category: Category::Text,
            session_id: None,
        }
    }

    #[tokio::test]
    async fn test_offline_transport_fails() {
        let result = OfflineTransport.exchange(&request()).await;
        assert_eq!(result, Err(ExchangeFailure::Transport("offline".into())));
    }

    #[tokio::test]
    async fn test_arc_delegates() {
        let transport: Arc<dyn ChatTransport> = Arc::new(OfflineTransport);
        assert!(transport.exchange(&request()).await.is_err());
    }
}
