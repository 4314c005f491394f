//! Collection lifecycle payloads.

use crate::validation::{not_blank, Validate, Validator};
use serde::{Deserialize, Serialize};

/// Body shared by collection create and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRequest {
    pub collection_id: String,
}

impl CollectionRequest {
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
        }
    }
}

impl Validate for CollectionRequest {
    fn check_fields(&self, v: &mut Validator) {
        v.check(
            not_blank(&self.collection_id),
            "collection_id",
            "collection_id must be provided",
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCreateResponse {
    pub success: bool,
    pub collection_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCollectionResponse {
    pub success: bool,
    #[serde(default)]
    pub found: bool,
    #[serde(default)]
    pub collection_id: String,
}

/// One entry of the collection listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub collection_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Paginated listing of every collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCollectionResponse {
    /// Total number of collections
    pub count: u64,
    /// URL of the next page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<CollectionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCollectionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
