//! Collection-independent tools against a mock API.

use crate::integration::mock_server::MockServerFixture;
use mockito::Matcher;
use serde_json::json;
use wetrocloud_sdk::{
    CategorizeRequest, ChatModel, DataExtractionRequest, ImageToTextRequest, Message,
    ResourceType, TextGenerationRequest, WireProtocol,
};

#[tokio::test]
async fn test_categorize() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/categorize/")
        .match_body(Matcher::Json(json!({
            "type": "text",
            "resource": "match review: 2-1 win",
            "json_schema": {"label": "string"},
            "categories": ["sports", "finance"],
            "prompt": "pick one"
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 12, "response": {"label": "sports"}}"#)
        .create_async()
        .await;

    let request = CategorizeRequest::new(
        ResourceType::Text,
        "match review: 2-1 win",
        vec!["sports".into(), "finance".into()],
    )
    .json_schema(json!({"label": "string"}))
    .prompt("pick one");
    let result = fixture.client().tools().categorize(&request).await.unwrap();

    assert_eq!(result.response.unwrap()["label"], "sports");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_text() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/text-generation/")
        .match_body(Matcher::Json(json!({
            "messages": [
                {"role": "system", "content": "You are terse."},
                {"role": "user", "content": "Say hi"}
            ],
            "model": "gpt-4o"
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 3, "response": "hi"}"#)
        .create_async()
        .await;

    let request = TextGenerationRequest::new(vec![
        Message::system("You are terse."),
        Message::user("Say hi"),
    ])
    .model(ChatModel::GPT_4O);
    let result = fixture.client().tools().generate_text(&request).await.unwrap();

    assert_eq!(result.text(), Some("hi"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_image_to_text() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/image-to-text/")
        .match_body(Matcher::Json(json!({
            "image_url": "https://example.com/cat.png",
            "request_query": "What animal is this?"
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 40, "response": "A cat."}"#)
        .create_async()
        .await;

    let result = fixture
        .client()
        .tools()
        .image_to_text(&ImageToTextRequest::new(
            "https://example.com/cat.png",
            "What animal is this?",
        ))
        .await
        .unwrap();

    assert_eq!(result.text(), Some("A cat."));
    assert_eq!(result.tokens, 40);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_extract_data_as_multipart() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .api("POST", "/v1/data-extraction/")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="website""#.to_string()),
            Matcher::Regex("https://example.com/shop".to_string()),
            Matcher::Regex(r#"name="json_schema""#.to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"success": true, "tokens": 9, "response": [{"name": "A1"}]}"#)
        .create_async()
        .await;

    let client = fixture
        .builder()
        .wire_protocol(WireProtocol::Multipart)
        .build()
        .unwrap();
    let result = client
        .tools()
        .extract_data(&DataExtractionRequest::new(
            "https://example.com/shop",
            json!([{"name": "<product name>"}]),
        ))
        .await
        .unwrap();

    assert_eq!(result.response.unwrap()[0]["name"], "A1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tools_errors_are_normalized() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "POST",
            "/v1/image-to-text/",
            400,
            r#"{"image_url": ["Enter a valid URL."]}"#,
        )
        .await;

    let err = fixture
        .client()
        .tools()
        .image_to_text(&ImageToTextRequest::new("not-a-url", "?"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(err.to_string().contains("image_url: Enter a valid URL."));
}
