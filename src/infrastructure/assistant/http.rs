//! HTTP assistant client - the production backend over a local endpoint

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::errors::AssistantError;
use crate::domain::traits::{Assistant, AssistantReply};

/// Default assistant endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/";

/// Assistant speaking the query/answer wire contract
pub struct HttpAssistant {
    endpoint: String,
    client: Client,
}

impl HttpAssistant {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Wire request structure
#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[async_trait]
impl Assistant for HttpAssistant {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&self, query: &str) -> Result<AssistantReply, AssistantError> {
        let request = QueryRequest { query };

        let response = self.client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Api { status, body });
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AssistantError::Parse(e.to_string()))?;

        // The answer field is optional; anything that is not a string
        // counts as no answer rather than a failure
        let answer = data
            .get("answer")
            .and_then(|value| value.as_str())
            .map(|answer| answer.to_string());

        Ok(AssistantReply { answer })
    }
}
