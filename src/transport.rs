//! HTTP transport for the ResilientDB transaction endpoints.
//!
//! [`TransactionApi`] is the seam between the typed client and the wire:
//! implement it to mock the service in tests or to swap in an alternative
//! transport. [`HttpApi`] is the default implementation, one HTTP round
//! trip per call against the configured base URL.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ResilientDbConfig;
use crate::wire::{CommitTransactionRequest, GetTransactionRequest, TransactionResponse};

/// Path of the filtered-query endpoint.
pub const GET_TRANSACTION_PATH: &str = "/v2/transactions/get";

/// Path of the commit endpoint.
pub const COMMIT_TRANSACTION_PATH: &str = "/v2/transactions/commit";

/// Errors raised by the transport layer.
///
/// These never reach callers of the public client operations directly;
/// the facade re-wraps them into its own error kinds.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (connection, timeout, malformed body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered outside the 2xx range.
    #[error("HTTP {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Trait for the transaction service's two operations.
///
/// Implement this trait to create mock transports for testing or
/// alternative transport implementations.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Submit a filtered query.
    async fn find(
        &self,
        request: GetTransactionRequest,
    ) -> Result<TransactionResponse, TransportError>;

    /// Submit a commit envelope.
    async fn commit_transaction(
        &self,
        request: CommitTransactionRequest,
    ) -> Result<TransactionResponse, TransportError>;
}

/// Default transport over reqwest.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    headers: Vec<(String, String)>,
}

impl HttpApi {
    /// Build the transport from client configuration.
    pub fn new(config: &ResilientDbConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers: config.headers.clone(),
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<TransactionResponse, TransportError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.post(&url).json(body);
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        debug!(url = %url, "dispatching request");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                url = %url,
                status = %status,
                body = %body,
                "request returned non-2xx status"
            );
            return Err(TransportError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        Ok(response.json::<TransactionResponse>().await?)
    }
}

#[async_trait]
impl TransactionApi for HttpApi {
    async fn find(
        &self,
        request: GetTransactionRequest,
    ) -> Result<TransactionResponse, TransportError> {
        self.post(GET_TRANSACTION_PATH, &request).await
    }

    async fn commit_transaction(
        &self,
        request: CommitTransactionRequest,
    ) -> Result<TransactionResponse, TransportError> {
        self.post(COMMIT_TRANSACTION_PATH, &request).await
    }
}
