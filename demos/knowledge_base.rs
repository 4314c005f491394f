//! Knowledge base walkthrough
//!
//! Creates a collection, fills it with text, JSON and web resources, queries
//! it (plain and structured), then categorizes a snippet with the tools API.
//!
//! Configuration comes from the environment:
//! - WETROCLOUD_API_KEY (required)
//! - WETROCLOUD_API_URL, WETROCLOUD_API_VERSION (optional)
//!
//! Usage:
//!   WETROCLOUD_API_KEY=your_key cargo run --example knowledge_base
//!   RUST_LOG=wetrocloud_sdk=debug cargo run --example knowledge_base

use anyhow::Context;
use schemars::JsonSchema;
use serde_json::json;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wetrocloud_sdk::{
    generate_id, json_schema_for, CategorizeRequest, ChatModel, ClientBuilder, QueryRequest,
    ResourceType,
};

#[allow(dead_code)]
#[derive(JsonSchema)]
struct FeatureList {
    features: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ClientBuilder::from_env()
        .timeout(Duration::from_secs(30))
        .build()
        .context("WETROCLOUD_API_KEY must be set")?;
    let rag = client.rag();

    let collection_id = format!("product-docs-{}", generate_id());
    println!("Creating knowledge base collection...");
    let created = rag.create_collection(&collection_id).await?;
    println!("Created collection with ID: {}", created.collection_id);

    println!("\nAdding resources to the collection...");
    rag.insert_text(
        &collection_id,
        "WetroCloud is a platform for building RAG applications. \
         It provides APIs for document processing, retrieval and generation.",
    )
    .await?;
    println!("✓ Added text resource");

    rag.insert_json(
        &collection_id,
        &json!({
            "features": ["Document processing", "Semantic search", "LLM integration"],
            "pricing": {"basic": "Free", "pro": "$49/month", "enterprise": "Contact sales"}
        }),
    )
    .await?;
    println!("✓ Added JSON resource");

    rag.insert_web(&collection_id, "https://docs.wetrocloud.com")
        .await?;
    println!("✓ Added web resource");

    println!("\nQuerying the knowledge base...");
    let answer = rag
        .query_collection(
            &QueryRequest::new(&collection_id, "What features does WetroCloud offer?")
                .model(ChatModel::GPT_4O_MINI),
        )
        .await?;
    println!("Response: {}", answer.text().unwrap_or("<structured>"));
    println!("Tokens used: {}", answer.tokens);

    let structured = rag
        .query_collection(
            &QueryRequest::new(&collection_id, "List every feature").json_schema(
                json_schema_for::<FeatureList>(),
                json!(["Use the exact feature names from the documents"]),
            ),
        )
        .await?;
    println!("Structured response: {:?}", structured.response);

    println!("\nCategorizing data...");
    let categorized = client
        .tools()
        .categorize(
            &CategorizeRequest::new(
                ResourceType::Text,
                "WetroCloud offers document processing with semantic search.",
                vec![
                    "Product".into(),
                    "Technology".into(),
                    "Documentation".into(),
                    "Marketing".into(),
                ],
            )
            .json_schema(json!({"label": "string"}))
            .prompt("Pick the single best category"),
        )
        .await?;
    println!("Categorization: {:?}", categorized.response);

    println!("\nCleaning up...");
    rag.delete_collection(&collection_id).await?;
    println!("Example completed successfully!");
    Ok(())
}
