//! Terminal chatbot backed by a collection
//!
//! Seeds a fresh collection with a few facts, then chats against it, keeping
//! the conversation history client-side. Type `exit` to quit; the collection
//! is deleted on the way out.
//!
//! Usage:
//!   WETROCLOUD_API_KEY=your_key cargo run --example simple_chatbot

use anyhow::Context;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use wetrocloud_sdk::{generate_id, ChatRequest, ClientBuilder, Message, RagClient};

const KNOWLEDGE: &[&str] = &[
    "WetroCloud provides RAG and LLM agent APIs. Its mission is to make AI \
     accessible to developers of all skill levels.",
    "Supported resource types are text, files, web pages, JSON data, YouTube \
     videos and audio files.",
    "There is a free tier with up to 1000 API calls per month. Billing is based \
     on API calls and tokens processed.",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ClientBuilder::from_env()
        .build()
        .context("WETROCLOUD_API_KEY must be set")?;
    let rag = client.rag();

    let collection_id = generate_id();
    println!("Creating chatbot knowledge base...");
    rag.create_collection(&collection_id).await?;
    seed(rag, &collection_id).await?;

    println!("\n=== Chatbot ===");
    println!("Type 'exit' to quit.");

    let mut history: Vec<Message> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\nYou: ");
        std::io::stdout().flush()?;
        let Some(input) = lines.next_line().await? else {
            break;
        };
        let input = input.trim().to_string();
        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let request = ChatRequest::new(&collection_id, &input).history(history.clone());
        match rag.chat(&request).await {
            Ok(reply) => {
                let text = reply.text().unwrap_or_default().to_string();
                println!("Chatbot: {}", text);
                history.push(Message::user(input));
                history.push(Message::assistant(text));
            }
            Err(e) => println!("Error: {}", e),
        }
    }

    println!("\nCleaning up resources...");
    match rag.delete_collection(&collection_id).await {
        Ok(_) => println!("Successfully deleted collection."),
        Err(e) => tracing::warn!(error = %e, "failed to delete collection"),
    }
    Ok(())
}

async fn seed(rag: RagClient<'_>, collection_id: &str) -> anyhow::Result<()> {
    for (i, fact) in KNOWLEDGE.iter().enumerate() {
        rag.insert_text(collection_id, *fact)
            .await
            .with_context(|| format!("adding fact {}", i + 1))?;
    }
    println!("Added {} facts.", KNOWLEDGE.len());
    Ok(())
}
