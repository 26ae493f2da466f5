//! HTTP client for the describe-instances endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

use rdswait_core::{InstanceRecord, ResourceId, SourceError, StatusSource};

use crate::error::ClientError;
use crate::wire::{DescribeResponse, ErrorDocument, REQUEST_CANCELED};

/// Settings for [`HttpStatusSource`].
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL of the status API, e.g. `http://127.0.0.1:4566`.
    pub endpoint: String,

    /// Bearer token sent with every request, if any.
    pub token: Option<String>,

    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl HttpConfig {
    /// Create a config for `endpoint` with no token and a 30 second timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Status source backed by a DescribeDBInstances-style HTTP API.
pub struct HttpStatusSource {
    inner: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpStatusSource {
    /// Create a new status source.
    pub fn new(config: HttpConfig) -> Result<Self, ClientError> {
        let parsed = Url::parse(&config.endpoint).map_err(|e| ClientError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let inner = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            inner,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn describe(
        &self,
        identifier: &ResourceId,
        max_records: u32,
    ) -> Result<Vec<InstanceRecord>, SourceError> {
        let url = format!("{}/db-instances", self.base_url);
        let max_records = max_records.to_string();
        debug!(url = %url, identifier = %identifier, "Describing instances");

        let mut request = self.inner.get(&url).query(&[
            ("DBInstanceIdentifier", identifier.as_str()),
            ("MaxRecords", max_records.as_str()),
        ]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(send_error)?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::provider(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(provider_error(status, &body));
        }

        let parsed: DescribeResponse =
            serde_json::from_slice(&body).map_err(|e| SourceError::Malformed(e.to_string()))?;
        Ok(parsed.into_instances().into_iter().map(Into::into).collect())
    }
}

fn send_error(e: reqwest::Error) -> SourceError {
    if e.is_builder() {
        return SourceError::InvalidRequest(e.to_string());
    }
    if e.is_timeout() {
        return SourceError::Provider {
            code: Some("RequestTimeout".to_string()),
            message: e.to_string(),
        };
    }
    SourceError::provider(e.to_string())
}

fn provider_error(status: StatusCode, body: &[u8]) -> SourceError {
    match serde_json::from_slice::<ErrorDocument>(body) {
        Ok(doc) if doc.error.code == REQUEST_CANCELED => SourceError::Cancelled,
        Ok(doc) => SourceError::Provider {
            message: format!("{}: {} (HTTP {})", doc.error.code, doc.error.message, status),
            code: Some(doc.error.code),
        },
        Err(_) => SourceError::provider(format!("HTTP {}", status)),
    }
}
