//! Fixed endpoint table, relative to the versioned API root.

use reqwest::Method;

#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    /// Sent as multipart form fields under [`WireProtocol::Multipart`](super::WireProtocol).
    pub form_capable: bool,
}

const fn endpoint(method: Method, path: &'static str, form_capable: bool) -> Endpoint {
    Endpoint {
        method,
        path,
        form_capable,
    }
}

pub(crate) const CREATE_COLLECTION: Endpoint = endpoint(Method::POST, "collection/create/", true);
pub(crate) const GET_COLLECTION: Endpoint = endpoint(Method::GET, "collection/get/", false);
pub(crate) const LIST_COLLECTIONS: Endpoint = endpoint(Method::GET, "collection/all/", false);
pub(crate) const QUERY_COLLECTION: Endpoint = endpoint(Method::POST, "collection/query/", false);
pub(crate) const CHAT_COLLECTION: Endpoint = endpoint(Method::POST, "collection/chat/", true);
pub(crate) const DELETE_COLLECTION: Endpoint = endpoint(Method::DELETE, "collection/delete/", false);
pub(crate) const INSERT_RESOURCE: Endpoint = endpoint(Method::POST, "resource/insert/", false);
pub(crate) const REMOVE_RESOURCE: Endpoint = endpoint(Method::DELETE, "resource/remove/", true);
pub(crate) const CATEGORIZE: Endpoint = endpoint(Method::POST, "categorize/", false);
pub(crate) const TEXT_GENERATION: Endpoint = endpoint(Method::POST, "text-generation/", true);
pub(crate) const IMAGE_TO_TEXT: Endpoint = endpoint(Method::POST, "image-to-text/", false);
pub(crate) const DATA_EXTRACTION: Endpoint = endpoint(Method::POST, "data-extraction/", true);
