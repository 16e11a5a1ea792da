//! # Registry Client
//!
//! A typed Rust client for a bucket registry HTTP API, providing CRUD,
//! list, and field-metadata operations over the registry's `/buckets`
//! collection.
//!
//! ## Overview
//!
//! This crate provides:
//! - A validated [`BaseUrl`] newtype for the registry address
//! - The [`BucketClient`] resource client with create/get/update/delete,
//!   list (optionally server-sorted), and field-metadata operations
//! - A shared [`clients::RequestExecutor`] every operation funnels through,
//!   translating failures into a two-tier taxonomy
//! - A [`ClientError`] taxonomy separating caller-input errors, server-side
//!   (domain) errors, and low-level I/O errors
//!
//! Each operation performs exactly one HTTP exchange; there are no implicit
//! retries, no caching, and no background work.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use registry_client::{BaseUrl, Bucket, BucketClient, ClientError};
//!
//! let base = BaseUrl::new("https://registry.example.com/api")?;
//! let client = BucketClient::new(&base);
//!
//! // Create a bucket; the server assigns the identifier.
//! let created = client.create(&Bucket::new("Flows")).await?;
//! let id = created.identifier.as_deref().expect("server assigns an id");
//!
//! // Fetch, update, list, delete.
//! let mut bucket = client.get(id).await?;
//! bucket.description = Some("Production flows".to_string());
//! let updated = client.update(&bucket).await?;
//!
//! let all = client.get_all().await?;
//! let removed = client.delete(id).await?;
//! ```
//!
//! ## Authenticated Requests
//!
//! Headers are fixed at construction and attached to every request:
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use registry_client::{BaseUrl, BucketClient};
//!
//! let mut headers = HashMap::new();
//! headers.insert("Authorization".to_string(), format!("Bearer {token}"));
//! let client = BucketClient::with_headers(&base, headers);
//! ```
//!
//! ## Error Handling
//!
//! Callers are expected to handle the three [`ClientError`] kinds
//! distinctly; in particular, [`ClientError::Io`] means the server could
//! not be reached at all, while [`ClientError::Domain`] means it rejected
//! the request. Retry logic, if any, belongs to the caller.
//!
//! ## Design Principles
//!
//! - **Fail-fast validation**: blank identifiers are rejected before any
//!   network call; the base URL validates on construction
//! - **One chokepoint**: every operation executes through the shared
//!   executor, so failures are classified exactly once
//! - **No shared mutable state**: clients are immutable after construction
//!   and `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod model;

// Re-export public types at crate root for convenience
pub use clients::BucketClient;
pub use config::BaseUrl;
pub use error::{ClientError, ConfigError, DomainError, InputError};
pub use model::{Bucket, Fields, SortOrder, SortParameter};
