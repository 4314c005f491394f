//! Collection, resource, query and chat operations against a mock API.

use crate::integration::mock_server::MockServerFixture;
use mockito::Matcher;
use serde_json::json;
use wetrocloud_sdk::{
    ChatModel, ChatRequest, ErrorCategory, Message, QueryRequest, ResourceDeleteRequest,
    WireProtocol,
};

#[tokio::test]
async fn test_create_collection_sends_json_body() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/collection/create/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"collection_id": "kb-1"})))
        .with_status(201)
        .with_body(r#"{"success": true, "collection_id": "kb-1"}"#)
        .create_async()
        .await;

    let client = fixture.client();
    let created = client.rag().create_collection("kb-1").await.unwrap();

    assert!(created.success);
    assert_eq!(created.collection_id, "kb-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_collection_encodes_path_segment() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "GET",
            "/v1/collection/get/my%20kb/",
            200,
            r#"{"success": true, "found": true, "collection_id": "my kb"}"#,
        )
        .await;

    let found = fixture.client().rag().get_collection("my kb").await.unwrap();

    assert!(found.found);
    assert_eq!(found.collection_id, "my kb");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_collections() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "GET",
            "/v1/collection/all/",
            200,
            r#"{
                "count": 2,
                "next": null,
                "previous": null,
                "results": [
                    {"collection_id": "kb-1", "created_at": "2025-01-01T00:00:00Z"},
                    {"collection_id": "kb-2"}
                ]
            }"#,
        )
        .await;

    let listing = fixture.client().rag().list_collections().await.unwrap();

    assert_eq!(listing.count, 2);
    assert_eq!(listing.results[0].collection_id, "kb-1");
    assert!(listing.results[1].created_at.is_none());
    assert!(listing.next.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_knowledge_base_lifecycle() {
    let mut fixture = MockServerFixture::new().await;
    let create = fixture
        .mock_json(
            "POST",
            "/v1/collection/create/",
            201,
            r#"{"success": true, "collection_id": "kb-1"}"#,
        )
        .await;
    let insert = fixture
        .api("POST", "/v1/resource/insert/")
        .match_body(Matcher::Json(json!({
            "collection_id": "kb-1",
            "type": "web",
            "resource": "https://example.com/doc"
        })))
        .with_status(200)
        .with_body(r#"{"resource_id": "r-9", "success": true, "tokens": 812}"#)
        .create_async()
        .await;
    let query = fixture
        .api("POST", "/v1/collection/query/")
        .match_body(Matcher::PartialJson(json!({
            "collection_id": "kb-1",
            "request_query": "What is this about?",
            "model": "gpt-4o-mini"
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 120, "response": "A demo page."}"#)
        .create_async()
        .await;
    let remove = fixture
        .api("DELETE", "/v1/resource/remove/")
        .match_body(Matcher::Json(json!({"collection_id": "kb-1", "resource_id": "r-9"})))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;
    let delete = fixture
        .api("DELETE", "/v1/collection/delete/")
        .match_body(Matcher::Json(json!({"collection_id": "kb-1"})))
        .with_status(200)
        .with_body(r#"{"success": true, "message": "Collection deleted"}"#)
        .create_async()
        .await;

    let client = fixture.client();
    let rag = client.rag();

    rag.create_collection("kb-1").await.unwrap();
    let inserted = rag.insert_web("kb-1", "https://example.com/doc").await.unwrap();
    assert_eq!(inserted.resource_id, "r-9");
    assert_eq!(inserted.tokens, 812);

    let answer = rag
        .query_collection(
            &QueryRequest::new("kb-1", "What is this about?").model(ChatModel::GPT_4O_MINI),
        )
        .await
        .unwrap();
    assert_eq!(answer.text(), Some("A demo page."));
    assert_eq!(answer.tokens, 120);

    let removed = rag
        .remove_resource(&ResourceDeleteRequest::new("kb-1", "r-9"))
        .await
        .unwrap();
    assert!(removed.success);

    let deleted = rag.delete_collection("kb-1").await.unwrap();
    assert_eq!(deleted.message, "Collection deleted");

    for mock in [create, insert, query, remove, delete] {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_insert_text_is_sent_inline() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/resource/insert/")
        .match_body(Matcher::Json(json!({
            "collection_id": "kb-1",
            "type": "text",
            "resource": "notes.txt is just a name here"
        })))
        .with_status(200)
        .with_body(r#"{"resource_id": "r-1", "success": true, "tokens": 7}"#)
        .create_async()
        .await;
    let upload = fixture.upload().expect(0).create_async().await;

    let inserted = fixture
        .client()
        .rag()
        .insert_text("kb-1", "notes.txt is just a name here")
        .await
        .unwrap();

    assert_eq!(inserted.resource_id, "r-1");
    mock.assert_async().await;
    upload.assert_async().await;
}

#[tokio::test]
async fn test_insert_json_serializes_value() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/resource/insert/")
        .match_body(Matcher::Json(json!({
            "collection_id": "kb-1",
            "type": "json",
            "resource": r#"{"sku":"A1"}"#
        })))
        .with_status(200)
        .with_body(r#"{"resource_id": "r-2", "success": true}"#)
        .create_async()
        .await;

    let inserted = fixture
        .client()
        .rag()
        .insert_json("kb-1", &json!({"sku": "A1"}))
        .await
        .unwrap();

    assert_eq!(inserted.tokens, 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_insert_youtube_passes_url_through() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/resource/insert/")
        .match_body(Matcher::Json(json!({
            "collection_id": "kb-1",
            "type": "youtube",
            "resource": "https://www.youtube.com/watch?v=abc123"
        })))
        .with_status(200)
        .with_body(r#"{"resource_id": "r-3", "success": true, "tokens": 450}"#)
        .create_async()
        .await;
    let upload = fixture.upload().expect(0).create_async().await;

    let inserted = fixture
        .client()
        .rag()
        .insert_youtube("kb-1", "https://www.youtube.com/watch?v=abc123")
        .await
        .unwrap();

    assert_eq!(inserted.tokens, 450);
    mock.assert_async().await;
    upload.assert_async().await;
}

#[tokio::test]
async fn test_chat_with_history() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/collection/chat/")
        .match_body(Matcher::Json(json!({
            "collection_id": "kb-1",
            "message": "and the price?",
            "chat_history": [
                {"role": "user", "content": "what is A1?"},
                {"role": "assistant", "content": "A blue widget."}
            ],
            "stream": false
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 30, "response": "Ten dollars."}"#)
        .create_async()
        .await;

    let reply = fixture
        .client()
        .rag()
        .chat(&ChatRequest::new("kb-1", "and the price?").history(vec![
            Message::user("what is A1?"),
            Message::assistant("A blue widget."),
        ]))
        .await
        .unwrap();

    assert_eq!(reply.text(), Some("Ten dollars."));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_chat_with_history_and_empty_message() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/collection/chat/")
        .match_body(Matcher::Json(json!({
            "collection_id": "kb-1",
            "message": "",
            "chat_history": [{"role": "user", "content": "summarize the handbook"}],
            "stream": false
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 12, "response": "It covers leave."}"#)
        .create_async()
        .await;

    let request =
        ChatRequest::new("kb-1", "").history(vec![Message::user("summarize the handbook")]);
    let reply = fixture.client().rag().chat(&request).await.unwrap();

    assert_eq!(reply.text(), Some("It covers leave."));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_remove_resource_passes_empty_id_to_server() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("DELETE", "/v1/resource/remove/")
        .match_body(Matcher::Json(json!({"collection_id": "kb-1", "resource_id": ""})))
        .with_status(404)
        .with_body(r#"{"error": "Resource not found"}"#)
        .create_async()
        .await;

    let err = fixture
        .client()
        .rag()
        .remove_resource(&ResourceDeleteRequest::new("kb-1", ""))
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Api);
    assert_eq!(err.status(), Some(404));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_structured_query_returns_object() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/collection/query/")
        .match_body(Matcher::PartialJson(json!({
            "json_schema": {"type": "object"},
            "json_schema_rules": ["one product per entry"]
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 5, "response": {"products": ["A1"]}}"#)
        .create_async()
        .await;

    let answer = fixture
        .client()
        .rag()
        .query_collection(&QueryRequest::new("kb-1", "list products").json_schema(
            json!({"type": "object"}),
            json!(["one product per entry"]),
        ))
        .await
        .unwrap();

    assert!(answer.text().is_none());
    assert_eq!(answer.response.unwrap()["products"][0], "A1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_multipart_protocol_for_form_capable_endpoints() {
    let mut fixture = MockServerFixture::new().await;
    let chat = fixture
        .api("POST", "/v1/collection/chat/")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="collection_id""#.to_string()),
            Matcher::Regex(r#"name="message""#.to_string()),
            Matcher::Regex(r#"name="chat_history""#.to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 1, "response": "ok"}"#)
        .create_async()
        .await;
    let query = fixture
        .api("POST", "/v1/collection/query/")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 1, "response": "ok"}"#)
        .create_async()
        .await;

    let client = fixture
        .builder()
        .wire_protocol(WireProtocol::Multipart)
        .build()
        .unwrap();
    client
        .rag()
        .chat(&ChatRequest::new("kb-1", "hi"))
        .await
        .unwrap();
    client
        .rag()
        .query_collection(&QueryRequest::new("kb-1", "hi"))
        .await
        .unwrap();

    chat.assert_async().await;
    query.assert_async().await;
}

#[tokio::test]
async fn test_validation_failures_never_reach_network() {
    let mut fixture = MockServerFixture::new().await;
    let any = fixture
        .server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let any_delete = fixture
        .server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = fixture.client();
    let rag = client.rag();

    let err = rag.create_collection("").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);

    let err = rag
        .chat(&ChatRequest::new("  ", "hello"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("collection_id"));

    let mut query = QueryRequest::new("kb-1", "q");
    query.json_schema = Some(json!({"type": "object"}));
    let err = rag.query_collection(&query).await.unwrap_err();
    assert!(err.to_string().contains("json_schema_rules"));

    let err = rag
        .remove_resource(&ResourceDeleteRequest::new("", "r-1"))
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);

    let err = rag.insert_text("", "hello").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);

    any.assert_async().await;
    any_delete.assert_async().await;
}

#[tokio::test]
async fn test_bearer_scheme_is_configurable() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/v1/collection/all/")
        .match_query(Matcher::UrlEncoded("referrer".into(), "RUST_SDK".into()))
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_body(r#"{"count": 0, "results": []}"#)
        .create_async()
        .await;

    let client = fixture
        .builder()
        .auth_scheme(wetrocloud_sdk::AuthScheme::Bearer)
        .build()
        .unwrap();
    let listing = client.rag().list_collections().await.unwrap();

    assert_eq!(listing.count, 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_end_to_end_text_then_query() {
    let mut fixture = MockServerFixture::new().await;
    let _create = fixture
        .mock_json(
            "POST",
            "/v1/collection/create/",
            201,
            r#"{"success": true, "collection_id": "kb-1"}"#,
        )
        .await;
    let _insert = fixture
        .api("POST", "/v1/resource/insert/")
        .match_body(Matcher::Json(json!({
            "collection_id": "kb-1",
            "type": "text",
            "resource": "hello world"
        })))
        .with_status(200)
        .with_body(r#"{"resource_id": "r-1", "success": true, "tokens": 2}"#)
        .create_async()
        .await;
    let _query = fixture
        .api("POST", "/v1/collection/query/")
        .match_body(Matcher::Json(json!({
            "collection_id": "kb-1",
            "request_query": "what did I say?",
            "stream": false
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 14, "response": "You said hello world."}"#)
        .create_async()
        .await;

    let client = fixture.client();
    let rag = client.rag();
    rag.create_collection("kb-1").await.unwrap();
    rag.insert_text("kb-1", "hello world").await.unwrap();
    let answer = rag
        .query_collection(&QueryRequest::new("kb-1", "what did I say?"))
        .await
        .unwrap();

    assert!(answer.success);
    assert_eq!(answer.tokens, 14);
}
