//! Wire-contract types for the ResilientDB transaction REST API.
//!
//! These structs serialize to the exact JSON shapes the service consumes
//! and produces. Field names match the wire protocol verbatim.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Transaction kind for record insertion.
pub const KIND_INSERT: &str = "INSERT";

/// Transaction kind for collection creation.
pub const KIND_CREATE_COLLECTION: &str = "CREATE_COLLECTION";

/// Status value the service reports on success.
pub const STATUS_SUCCESS: &str = "success";

/// Request body for `POST /v2/transactions/get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionRequest {
    pub collection_name: String,
    pub filter_key: String,
    pub filter_value: String,
}

/// Request body for `POST /v2/transactions/commit`.
///
/// The `id` field carries the transaction kind (`INSERT`,
/// `CREATE_COLLECTION`), not a unique identifier. The name is part of the
/// wire protocol and is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitTransactionRequest {
    pub id: String,
    pub value: CommitValue,
}

/// The `value` envelope of a commit request: the target collection plus the
/// kind-specific payload fields, flattened alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitValue {
    pub collection_name: String,
    #[serde(flatten)]
    pub payload: serde_json::Value,
}

/// Response body shared by both transaction endpoints.
///
/// `data` is present on successful queries and holds a string-encoded JSON
/// document. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl TransactionResponse {
    /// Returns true if the service reported success.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Storage options for a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionOptions {
    /// Primary key field name.
    pub primary_key: String,

    /// Optional secondary key field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_key: Option<String>,

    /// Storage-engine filter policy (e.g. `leveldb.BuiltinBloomFilter`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_policy: Option<String>,

    /// Bits per key for the filter policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_policy_bits_per_key: Option<u32>,
}

impl CollectionOptions {
    /// Create options with the given primary key.
    pub fn new(primary_key: impl Into<String>) -> Self {
        Self {
            primary_key: primary_key.into(),
            ..Self::default()
        }
    }

    /// Set the secondary key.
    pub fn with_secondary_key(mut self, key: impl Into<String>) -> Self {
        self.secondary_key = Some(key.into());
        self
    }

    /// Set an explicit filter policy.
    pub fn with_filter_policy(mut self, policy: impl Into<String>) -> Self {
        self.filter_policy = Some(policy.into());
        self
    }

    /// Set the filter policy bits per key.
    pub fn with_filter_policy_bits_per_key(mut self, bits: u32) -> Self {
        self.filter_policy_bits_per_key = Some(bits);
        self
    }
}

/// Primitive type tag for a schema field.
///
/// The service validates `string`, `integer`, and `boolean`. `Datetime`
/// exists for callers mapping richer source types and is passed through
/// without wire-level validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    Datetime,
}

impl FieldType {
    /// Returns the wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Datetime => "datetime",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single schema field. Serializes as a one-entry mapping from field name
/// to type tag, the shape the service expects inside `schema.fields`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub field_type: FieldType,
}

impl Serialize for SchemaField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.field_type)?;
        map.end()
    }
}

/// Collection schema: ordered field entries plus required field names.
///
/// `required` entries are not checked against `fields` here; the service
/// performs that validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionSchema {
    pub fields: Vec<SchemaField>,
    pub required: Vec<String>,
}

impl CollectionSchema {
    /// Start building a schema.
    pub fn builder() -> crate::schema::SchemaBuilder {
        crate::schema::SchemaBuilder::new()
    }
}
