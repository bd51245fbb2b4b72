use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::types::{AssistantReply, ChatRequest};

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("assistant endpoint unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("assistant endpoint answered {0}")]
    Status(StatusCode),
    #[error("assistant reply could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

pub type AssistantResult = Result<AssistantReply, AssistantError>;

#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> AssistantResult;
}

/// Posts chat requests as JSON to the external medical assistant service.
#[derive(Clone)]
pub struct HttpAssistant {
    client: Client,
    endpoint: String,
}

impl HttpAssistant {
    pub fn new(endpoint: impl Into<String>) -> HttpAssistant {
        HttpAssistant {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<HttpAssistant> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpAssistant {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AssistantClient for HttpAssistant {
    async fn send(&self, request: &ChatRequest) -> AssistantResult {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(AssistantError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status(status));
        }

        response
            .json::<AssistantReply>()
            .await
            .map_err(AssistantError::Decode)
    }
}
