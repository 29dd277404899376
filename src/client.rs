//! Typed client over the ResilientDB transaction service.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::ResilientDbConfig;
use crate::error::{ClientError, Result};
use crate::filter::{stringify, Filter};
use crate::transport::{HttpApi, TransactionApi};
use crate::wire::{
    CollectionOptions, CollectionSchema, CommitTransactionRequest, CommitValue,
    GetTransactionRequest, KIND_CREATE_COLLECTION, KIND_INSERT,
};

/// Filter policy injected for secondary-keyed collections.
pub const DEFAULT_FILTER_POLICY: &str = "leveldb.BuiltinBloomFilter";

/// Bits per key for the injected filter policy.
pub const DEFAULT_FILTER_POLICY_BITS_PER_KEY: u32 = 20;

/// Secondary-keyed collections always carry a filter policy; fill in the
/// defaults unless the caller chose their own.
fn finalize_options(mut options: CollectionOptions) -> CollectionOptions {
    if options.secondary_key.is_some() {
        if options.filter_policy.is_none() {
            options.filter_policy = Some(DEFAULT_FILTER_POLICY.to_string());
        }
        if options.filter_policy_bits_per_key.is_none() {
            options.filter_policy_bits_per_key = Some(DEFAULT_FILTER_POLICY_BITS_PER_KEY);
        }
    }
    options
}

/// Submits commit envelopes and inspects the reported status.
#[derive(Clone)]
pub struct TransactionCommitter {
    api: Arc<dyn TransactionApi>,
}

impl TransactionCommitter {
    /// Create a committer over the given transport.
    pub fn new(api: Arc<dyn TransactionApi>) -> Self {
        Self { api }
    }

    /// Commit a transaction of the given kind against a collection.
    ///
    /// The envelope's `id` field carries the kind string; `payload` must
    /// serialize to a JSON object whose fields land next to
    /// `collection_name` inside the envelope's `value`.
    pub async fn commit(&self, kind: &str, collection_name: &str, payload: Value) -> Result<()> {
        let request = CommitTransactionRequest {
            id: kind.to_string(),
            value: CommitValue {
                collection_name: collection_name.to_string(),
                payload,
            },
        };

        let response = self
            .api
            .commit_transaction(request)
            .await
            .map_err(|e| ClientError::Commit {
                kind: kind.to_string(),
                message: e.to_string(),
            })?;

        debug!(kind = %kind, response = ?response, "commit transaction response");

        if !response.is_success() {
            return Err(ClientError::Commit {
                kind: kind.to_string(),
                message: format!("service returned status `{}`", response.status),
            });
        }
        Ok(())
    }
}

/// Submits filtered queries and decodes their results.
#[derive(Clone)]
pub struct QueryClient {
    api: Arc<dyn TransactionApi>,
}

impl QueryClient {
    /// Create a query client over the given transport.
    pub fn new(api: Arc<dyn TransactionApi>) -> Self {
        Self { api }
    }

    /// Query records matching a filter.
    ///
    /// Only the filter's first pair is sent; the service queries a single
    /// field per call. An empty filter fails locally without touching the
    /// transport.
    pub async fn find<T: DeserializeOwned>(
        &self,
        collection_name: &str,
        filter: &Filter,
    ) -> Result<Vec<T>> {
        let (filter_key, filter_value) = filter.first().ok_or(ClientError::EmptyFilter)?;

        let request = GetTransactionRequest {
            collection_name: collection_name.to_string(),
            filter_key: filter_key.to_string(),
            filter_value: stringify(filter_value),
        };

        let response = self
            .api
            .find(request)
            .await
            .map_err(|e| ClientError::Query(e.to_string()))?;

        match (response.is_success(), response.data) {
            (true, Some(data)) => {
                serde_json::from_str(&data).map_err(|e| ClientError::Query(e.to_string()))
            }
            (true, None) => Err(ClientError::Query(
                "service response carried no data".to_string(),
            )),
            (false, _) => Err(ClientError::Query(format!(
                "service returned status `{}`",
                response.status
            ))),
        }
    }

    /// Query records by an explicit key/value pair.
    pub async fn find_raw(
        &self,
        collection_name: &str,
        filter_key: &str,
        filter_value: &str,
    ) -> Result<Vec<Value>> {
        self.find(collection_name, &Filter::by(filter_key, filter_value))
            .await
    }

    /// Look up a single record by primary key value.
    ///
    /// Queries the literal field `id`; collections with a different
    /// primary key should use [`find`](Self::find) with an explicit key.
    pub async fn find_by_id<T: DeserializeOwned>(
        &self,
        collection_name: &str,
        id: impl ToString,
    ) -> Result<Option<T>> {
        // TODO: look up the collection's configured primary key instead of
        // the literal "id".
        let request = GetTransactionRequest {
            collection_name: collection_name.to_string(),
            filter_key: "id".to_string(),
            filter_value: id.to_string(),
        };

        let response = self
            .api
            .find(request)
            .await
            .map_err(|e| ClientError::FindById(e.to_string()))?;

        match (response.is_success(), response.data) {
            (true, Some(data)) => {
                let parsed: Value =
                    serde_json::from_str(&data).map_err(|e| ClientError::FindById(e.to_string()))?;
                match parsed {
                    Value::Array(items) => items
                        .into_iter()
                        .next()
                        .map(serde_json::from_value)
                        .transpose()
                        .map_err(|e| ClientError::FindById(e.to_string())),
                    record => serde_json::from_value(record)
                        .map(Some)
                        .map_err(|e| ClientError::FindById(e.to_string())),
                }
            }
            (true, None) => Err(ClientError::FindById(
                "service response carried no data".to_string(),
            )),
            (false, _) => Err(ClientError::FindById(format!(
                "service returned status `{}`",
                response.status
            ))),
        }
    }
}

/// Client for a ResilientDB transaction service.
///
/// Combines the committer and query halves over one shared transport. The
/// client holds no other state, is cheap to clone, and individual calls
/// are independent; callers may issue them concurrently.
#[derive(Clone)]
pub struct ResilientDb {
    /// Committer for insert and collection-creation envelopes.
    pub committer: TransactionCommitter,
    /// Query client for filtered reads.
    pub query: QueryClient,
}

impl ResilientDb {
    /// Create a client from configuration, using the default HTTP transport.
    pub fn new(config: ResilientDbConfig) -> Result<Self> {
        let api = HttpApi::new(&config).map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self::with_api(Arc::new(api)))
    }

    /// Create a client from environment variables with defaults.
    pub fn from_env() -> Result<Self> {
        Self::new(ResilientDbConfig::from_env())
    }

    /// Create a client over an existing transport.
    ///
    /// Use this to plug in a mock [`TransactionApi`] in tests.
    pub fn with_api(api: Arc<dyn TransactionApi>) -> Self {
        Self {
            committer: TransactionCommitter::new(api.clone()),
            query: QueryClient::new(api),
        }
    }

    /// Insert a record into a collection.
    pub async fn insert<T: Serialize>(&self, collection_name: &str, record: &T) -> Result<()> {
        let record = serde_json::to_value(record).map_err(|e| ClientError::Commit {
            kind: KIND_INSERT.to_string(),
            message: e.to_string(),
        })?;

        debug!(collection_name = %collection_name, "inserting record");
        self.committer
            .commit(KIND_INSERT, collection_name, json!({ "value": record }))
            .await
    }

    /// Create a collection with the given options and schema.
    ///
    /// When `options` names a secondary key and no filter policy, the
    /// bloom-filter defaults are injected before transmission.
    pub async fn create_collection(
        &self,
        collection_name: &str,
        options: CollectionOptions,
        schema: CollectionSchema,
    ) -> Result<()> {
        let options = finalize_options(options);
        self.committer
            .commit(
                KIND_CREATE_COLLECTION,
                collection_name,
                json!({ "options": options, "schema": schema }),
            )
            .await
    }

    /// Commit a transaction of an arbitrary kind (delegates to the committer).
    pub async fn commit_transaction(
        &self,
        kind: &str,
        collection_name: &str,
        payload: Value,
    ) -> Result<()> {
        self.committer.commit(kind, collection_name, payload).await
    }

    /// Query records matching a filter (delegates to the query client).
    pub async fn find<T: DeserializeOwned>(
        &self,
        collection_name: &str,
        filter: &Filter,
    ) -> Result<Vec<T>> {
        self.query.find(collection_name, filter).await
    }

    /// Query records by an explicit key/value pair.
    pub async fn find_raw(
        &self,
        collection_name: &str,
        filter_key: &str,
        filter_value: &str,
    ) -> Result<Vec<Value>> {
        self.query
            .find_raw(collection_name, filter_key, filter_value)
            .await
    }

    /// Look up a single record by primary key value.
    pub async fn find_by_id<T: DeserializeOwned>(
        &self,
        collection_name: &str,
        id: impl ToString,
    ) -> Result<Option<T>> {
        self.query.find_by_id(collection_name, id).await
    }
}
