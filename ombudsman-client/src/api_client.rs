//! HTTP client for the ombudsman API.
//!
//! Public endpoint: `POST /messages`. Admin endpoints (`/admin/messages…`) need the bearer
//! token obtained from `POST /auth/login`.

use async_trait::async_trait;
use ombudsman_core::{Message, MessageUpdate, NewMessage};
use reqwest::{Client, Response, StatusCode, Url};
use tracing::{debug, info, warn};

use crate::error::{ClientError, Result};
use crate::models::{message_text, ApiErrorBody, LoginRequest, LoginResponse};
use crate::source::MessageSource;
use crate::token::mask_token;

/// Production API base URL.
pub const DEFAULT_API_URL: &str = "https://ouvidoria-api-production.up.railway.app";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Self::with_client(client, base_url)
    }

    /// Uses an existing reqwest client (shared connection pool, custom timeouts).
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ClientError::InvalidUrl(base_url.to_string()))?;
        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base URL path, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn bearer(&self) -> Result<String> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
            .ok_or(ClientError::MissingToken)
    }

    /// Exchanges admin credentials for a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        info!(username = %username, "step: admin login");

        let response = self
            .client
            .post(self.url(&["auth", "login"]))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed: Option<LoginResponse> = serde_json::from_str(&body).ok();

        match parsed {
            Some(LoginResponse {
                access_token: Some(token),
                ..
            }) if status.is_success() && !token.is_empty() => {
                info!(token = %mask_token(&token), "step: admin login succeeded");
                Ok(token)
            }
            other => {
                let message = other
                    .and_then(|r| r.message)
                    .and_then(|m| message_text(&m))
                    .unwrap_or_else(|| "invalid credentials".to_string());
                warn!(status = status.as_u16(), message = %message, "admin login rejected");
                Err(ClientError::Login(message))
            }
        }
    }

    /// Sends the public feedback form. No token needed.
    pub async fn submit(&self, message: &NewMessage) -> Result<()> {
        message.validate()?;
        info!(
            message_type = %message.message_type,
            anonymous = message.name.is_none(),
            content_len = message.content.len(),
            "step: submit message"
        );

        let url = self.url(&["messages"]);
        let response = self.client.post(url.clone()).json(message).send().await?;
        check(response, url.path()).await?;

        info!("step: message submitted");
        Ok(())
    }
}

/// Maps non-2xx responses onto [`ClientError`].
async fn check(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), resource = %what, "API request failed");

    match status {
        StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ClientError::NotFound(what.to_string())),
        _ => Err(ClientError::Api {
            status: status.as_u16(),
            message: ApiErrorBody::message_from(&body),
        }),
    }
}

#[async_trait]
impl MessageSource for ApiClient {
    async fn fetch_all(&self) -> Result<Vec<Message>> {
        let url = self.url(&["admin", "messages"]);
        let response = self
            .client
            .get(url.clone())
            .header("Authorization", self.bearer()?)
            .send()
            .await?;
        let messages: Vec<Message> = check(response, url.path()).await?.json().await?;

        info!(count = messages.len(), "Retrieved messages");
        Ok(messages)
    }

    async fn fetch_one(&self, id: &str) -> Result<Message> {
        let url = self.url(&["admin", "messages", id]);
        let response = self
            .client
            .get(url.clone())
            .header("Authorization", self.bearer()?)
            .send()
            .await?;
        let message: Message = check(response, url.path()).await?.json().await?;

        debug!(id = %message.id, status = %message.status, "Retrieved message details");
        Ok(message)
    }

    async fn update(&self, id: &str, update: &MessageUpdate) -> Result<()> {
        let url = self.url(&["admin", "messages", id]);
        let response = self
            .client
            .patch(url.clone())
            .header("Authorization", self.bearer()?)
            .json(update)
            .send()
            .await?;
        check(response, url.path()).await?;

        info!(
            id = %id,
            status = ?update.status,
            has_response = update.admin_response.is_some(),
            "Updated message"
        );
        Ok(())
    }
}
