//! # wetrocloud-sdk
//!
//! Async Rust client for the WetroCloud retrieval platform: manage
//! collections, insert resources, run retrieval-augmented queries and chats,
//! and call the collection-independent AI tools.
//!
//! ## Overview
//!
//! Every operation is a thin mapping onto one HTTP endpoint. The shared
//! machinery lives underneath:
//!
//! - **Transport**: authentication, JSON or multipart bodies, the SDK
//!   referrer tag and URL composition under `<base>/<version>/`
//! - **Error normalization**: platform error bodies of any known shape become
//!   one [`ApiError`] with a readable message
//! - **Upload staging**: local files and byte streams are sent to a separate
//!   upload host first; the returned URL is what gets inserted
//! - **Validation**: required fields are checked before any network call
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wetrocloud_sdk::{ChatModel, Client, QueryRequest};
//!
//! #[tokio::main]
//! async fn main() -> wetrocloud_sdk::Result<()> {
//!     let client = Client::new("your-api-key")?;
//!     let rag = client.rag();
//!
//!     rag.create_collection("kb-1").await?;
//!     rag.insert_web("kb-1", "https://example.com/article").await?;
//!
//!     let answer = rag
//!         .query_collection(
//!             &QueryRequest::new("kb-1", "What is the article about?")
//!                 .model(ChatModel::GPT_4O_MINI),
//!         )
//!         .await?;
//!     println!("{}", answer.text().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`Client`], its builder and the rag/tools operation groups |
//! | [`transport`] | HTTP transport, error normalization and upload staging |
//! | [`types`] | Request and response shapes |
//! | [`validation`] | Field validation run before requests are sent |
//! | [`error`] | Unified [`Error`] type |
//! | [`utils`] | Id generation and JSON schema helpers |

pub mod client;
pub mod error;
pub mod transport;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types for convenience
pub use client::{Client, ClientBuilder, RagClient, ToolsClient, WireProtocol};
pub use error::{Error, ErrorCategory, ErrorContext};
pub use transport::{with_cancellation, ApiError, AuthScheme, TransportError, UploadError};
pub use types::{
    ByteStream, CategorizeRequest, ChatModel, ChatRequest, CollectionCreateResponse,
    DataExtractionRequest, DeleteCollectionResponse, GetCollectionResponse, ImageToTextRequest,
    InsertResourceRequest, ListCollectionResponse, Message, MessageRole, QueryRequest,
    ResourceDeleteRequest, ResourceDeleteResponse, ResourceInsertResponse, ResourceSource,
    ResourceType, StandardResponse, TextGenerationRequest,
};
pub use utils::{generate_id, json_schema_for};
pub use validation::{Validate, ValidationError, Validator};

pub use tokio_util::sync::CancellationToken;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
