//! Command handlers. Each returns the text to print so output can be checked in tests.

use anyhow::{Context, Result};
use ombudsman_client::{ApiClient, Dashboard, MessageSource};
use ombudsman_core::{
    MessageFilter, MessageFilterKey, MessageStatus, MessageType, MessageUpdate, NewMessage,
};
use pagination::{PaginationOptions, DEFAULT_PAGE_SIZES};
use tracing::{info, warn};

use crate::render;

/// Options of `ombud list`.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub message_type: Option<String>,
    pub status: Option<String>,
    pub page: usize,
    pub per_page: usize,
    pub window: usize,
}

pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<String> {
    let token = client
        .login(username, password)
        .await
        .context("Admin login failed")?;
    Ok(format!("export OMBUDSMAN_TOKEN={}", token))
}

/// Builds the public-form payload; a missing type means `other`.
pub fn new_message(
    content: String,
    name: Option<String>,
    email: Option<String>,
    message_type: Option<&str>,
) -> Result<NewMessage> {
    let message_type = match message_type {
        Some(raw) => raw.parse::<MessageType>()?,
        None => MessageType::Other,
    };
    let message = NewMessage::new(content)
        .with_name(name)
        .with_email(email)
        .with_type(message_type);
    message.validate()?;
    Ok(message)
}

pub async fn submit(client: &ApiClient, message: &NewMessage) -> Result<String> {
    client
        .submit(message)
        .await
        .context("Failed to send message")?;
    Ok("Message sent. Thank you for your feedback!".to_string())
}

/// Loads the full collection, applies filters and page selection, renders the dashboard.
pub async fn list<S: MessageSource>(source: S, query: &ListQuery) -> Result<String> {
    if !DEFAULT_PAGE_SIZES.contains(&query.per_page) {
        anyhow::bail!(
            "--per-page must be one of {:?}, got {}",
            DEFAULT_PAGE_SIZES,
            query.per_page
        );
    }
    let filters = parse_filters(query)?;

    let options = PaginationOptions {
        initial_items_per_page: query.per_page,
        ..PaginationOptions::default()
    };
    let mut dashboard = Dashboard::with_options(source, options);
    dashboard
        .refresh()
        .await
        .context("Failed to load messages")?;

    let engine = dashboard.engine_mut();
    for (key, value) in filters {
        engine.change_filter(key, value);
    }
    let landed = engine.go_to_page(query.page);
    if landed != query.page {
        warn!(
            requested = query.page,
            landed,
            total_pages = engine.total_pages(),
            "requested page does not exist"
        );
    }

    Ok(render::dashboard(&dashboard, query.window))
}

pub async fn show<S: MessageSource>(source: &S, id: &str) -> Result<String> {
    let message = source
        .fetch_one(id)
        .await
        .with_context(|| format!("Failed to load message {}", id))?;
    Ok(render::details(&message))
}

/// Sends the update, reloads the collection and reports the new state.
///
/// Errors only when the update itself was rejected.
pub async fn update<S: MessageSource>(
    source: S,
    id: &str,
    status: Option<&str>,
    response: Option<String>,
) -> Result<String> {
    let mut update = MessageUpdate::new();
    if let Some(raw) = status {
        update = update.status(raw.parse::<MessageStatus>()?);
    }
    if let Some(response) = response.filter(|r| !r.trim().is_empty()) {
        update = update.admin_response(response);
    }
    if update.is_empty() {
        anyhow::bail!("Nothing to update: pass --status and/or --response");
    }

    let mut dashboard = Dashboard::new(source);
    dashboard
        .update_message(id, &update)
        .await
        .with_context(|| format!("Failed to update message {}", id))?;
    info!(id = %id, "step: message updated");

    // Missing from the engine only when the reload after the update failed.
    let report = match dashboard.engine().find(id) {
        Some(message) => format!(
            "Message {} updated (status: {}).\n{}",
            id,
            message.status.label(),
            render::stats(&dashboard.stats())
        ),
        None => format!(
            "Message {} updated{}. Reloading messages failed; run `ombud list` to see them.",
            id,
            update
                .status
                .map(|status| format!(" (status: {})", status.label()))
                .unwrap_or_default()
        ),
    };
    Ok(report)
}

fn parse_filters(query: &ListQuery) -> Result<Vec<(MessageFilterKey, Option<MessageFilter>)>> {
    let mut filters = Vec::new();
    if let Some(ref raw) = query.message_type {
        filters.push((MessageFilterKey::Type, MessageFilter::parse(MessageFilterKey::Type, raw)?));
    }
    if let Some(ref raw) = query.status {
        filters.push((
            MessageFilterKey::Status,
            MessageFilter::parse(MessageFilterKey::Status, raw)?,
        ));
    }
    Ok(filters)
}
