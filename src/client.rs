//! Client for the platform API.
//!
//! Keep the public surface small: a [`Client`] built by [`ClientBuilder`],
//! with [`RagClient`] and [`ToolsClient`] views for the two endpoint families.

pub mod builder;
pub mod core;
mod endpoint;
pub mod rag;
pub mod tools;

pub use builder::{ClientBuilder, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use self::core::{Client, WireProtocol};
pub use rag::RagClient;
pub use tools::ToolsClient;
