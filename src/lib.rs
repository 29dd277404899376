//! Ergonomic Rust client for the ResilientDB transaction REST API.
//!
//! This crate provides a typed client for collection management, record
//! insertion, and filtered queries against a ResilientDB endpoint.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use resilientdb_client::{
//!     CollectionOptions, FieldType, Filter, ResilientDb, ResilientDbConfig, SchemaBuilder,
//! };
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//!     category: String,
//!     price: u32,
//! }
//!
//! async fn example() -> resilientdb_client::Result<()> {
//!     let db = ResilientDb::new(ResilientDbConfig::default())?;
//!
//!     // Create a collection
//!     let schema = SchemaBuilder::new()
//!         .field("id", FieldType::Integer)
//!         .field("name", FieldType::String)
//!         .field("price", FieldType::Integer)
//!         .field("category", FieldType::String)
//!         .required("id")
//!         .required("category")
//!         .build();
//!     db.create_collection(
//!         "products",
//!         CollectionOptions::new("id").with_secondary_key("category"),
//!         schema,
//!     )
//!     .await?;
//!
//!     // Insert a record
//!     let laptop = Product {
//!         id: 12,
//!         name: "Laptop".to_string(),
//!         category: "electronics".to_string(),
//!         price: 999,
//!     };
//!     db.insert("products", &laptop).await?;
//!
//!     // Query by filter
//!     let products: Vec<Product> = db
//!         .find("products", &Filter::by("category", "electronics"))
//!         .await?;
//!
//!     // Look up by primary key value
//!     let product: Option<Product> = db.find_by_id("products", 12).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Mocking for Tests
//!
//! Implement the `TransactionApi` trait to create a mock transport:
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use resilientdb_client::transport::{TransactionApi, TransportError};
//! use resilientdb_client::wire::{
//!     CommitTransactionRequest, GetTransactionRequest, TransactionResponse,
//! };
//!
//! struct MockApi;
//!
//! #[async_trait]
//! impl TransactionApi for MockApi {
//!     async fn find(
//!         &self,
//!         _request: GetTransactionRequest,
//!     ) -> Result<TransactionResponse, TransportError> {
//!         Ok(TransactionResponse {
//!             status: "success".to_string(),
//!             data: Some("[]".to_string()),
//!         })
//!     }
//!
//!     async fn commit_transaction(
//!         &self,
//!         _request: CommitTransactionRequest,
//!     ) -> Result<TransactionResponse, TransportError> {
//!         Ok(TransactionResponse {
//!             status: "success".to_string(),
//!             data: None,
//!         })
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod schema;
pub mod transport;
pub mod wire;

// Re-export main types at crate root
pub use client::{
    QueryClient, ResilientDb, TransactionCommitter, DEFAULT_FILTER_POLICY,
    DEFAULT_FILTER_POLICY_BITS_PER_KEY,
};
pub use config::ResilientDbConfig;
pub use error::{ClientError, Result};
pub use filter::Filter;
pub use schema::SchemaBuilder;
pub use transport::{HttpApi, TransactionApi, TransportError};
pub use wire::{
    CollectionOptions, CollectionSchema, FieldType, SchemaField, TransactionResponse,
    KIND_CREATE_COLLECTION, KIND_INSERT,
};
