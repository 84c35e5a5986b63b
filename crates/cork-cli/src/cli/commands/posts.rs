//! Headless post management commands.
//!
//! Same validation rules as the board's editor: empty fields fail locally
//! before any request is sent.

use anyhow::{Context, Result};
use cork_client::{ApiClient, Config};
use cork_types::PostPayload;

use super::require_session;

/// Lists all posts.
pub async fn list(config: &Config, json: bool) -> Result<()> {
    let session = require_session()?;
    let api = ApiClient::new(config.resolve_base_url()?);
    let posts = api.list_posts(&session).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&posts).context("serialize posts")?
        );
        return Ok(());
    }

    if posts.is_empty() {
        println!("No posts.");
        return Ok(());
    }

    for post in posts {
        println!("{}  {}  {}", post.id, post.title, post.description);
    }
    Ok(())
}

/// Creates a post.
pub async fn create(config: &Config, title: &str, description: &str) -> Result<()> {
    let payload = validated_payload(title, description)?;
    let session = require_session()?;
    let api = ApiClient::new(config.resolve_base_url()?);

    let post = api.create_post(&session, &payload).await?;
    println!("Created post {}.", post.id);
    Ok(())
}

/// Updates a post.
pub async fn update(config: &Config, id: &str, title: &str, description: &str) -> Result<()> {
    let payload = validated_payload(title, description)?;
    let session = require_session()?;
    let api = ApiClient::new(config.resolve_base_url()?);

    let post = api.update_post(&session, id, &payload).await?;
    println!("Updated post {}.", post.id);
    Ok(())
}

/// Deletes a post.
pub async fn delete(config: &Config, id: &str) -> Result<()> {
    let session = require_session()?;
    let api = ApiClient::new(config.resolve_base_url()?);

    api.delete_post(&session, id).await?;
    println!("Deleted post {id}.");
    Ok(())
}

fn validated_payload(title: &str, description: &str) -> Result<PostPayload> {
    if title.trim().is_empty() || description.trim().is_empty() {
        anyhow::bail!("Title and description are required");
    }
    Ok(PostPayload {
        title: title.to_string(),
        description: description.to_string(),
    })
}
