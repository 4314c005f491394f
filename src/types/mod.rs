//! # Types Module
//!
//! Request and response shapes for every platform endpoint. Field names match
//! the wire contract (`snake_case`) so values round-trip unchanged.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`collection`] | Collection create/get/list/delete payloads |
//! | [`resource`] | Resource types, sources and insert/remove payloads |
//! | [`query`] | Query and chat requests, the shared [`StandardResponse`] |
//! | [`tools`] | Categorize, text generation, image-to-text and extraction |
//! | [`message`] | Role-tagged chat messages |
//! | [`model`] | Chat model identifiers |

pub mod collection;
pub mod message;
pub mod model;
pub mod query;
pub mod resource;
pub mod tools;

pub use collection::{
    CollectionCreateResponse, CollectionItem, CollectionRequest, DeleteCollectionResponse,
    GetCollectionResponse, ListCollectionResponse,
};
pub use message::{Message, MessageRole};
pub use model::ChatModel;
pub use query::{ChatRequest, QueryRequest, StandardResponse};
pub use resource::{
    ByteStream, InsertResourceRequest, ResourceDeleteRequest, ResourceDeleteResponse,
    ResourceInsertPayload, ResourceInsertResponse, ResourceSource, ResourceType,
};
pub use tools::{CategorizeRequest, DataExtractionRequest, ImageToTextRequest, TextGenerationRequest};
