//! Desk config: API endpoint, admin token, logging, default page size. Loaded from env.

use anyhow::Result;
use ombudsman_client::{ApiClient, DEFAULT_API_URL};
use pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE_SIZES};
use std::env;

#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// OMBUDSMAN_API_URL
    pub api_url: String,
    /// OMBUDSMAN_TOKEN; needed by admin commands only
    pub token: Option<String>,
    /// Log file path
    pub log_file: String,
    /// OMBUDSMAN_PAGE_SIZE, default for `list --per-page`
    pub page_size: usize,
}

impl DeskConfig {
    /// Load from environment variables. `api_url` and `token` override the env values if provided.
    pub fn load(api_url: Option<String>, token: Option<String>) -> Result<Self> {
        let api_url = api_url
            .or_else(|| env::var("OMBUDSMAN_API_URL").ok())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let token = token
            .or_else(|| env::var("OMBUDSMAN_TOKEN").ok())
            .filter(|t| !t.trim().is_empty());
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/ombudsman.log".to_string());
        let page_size = env::var("OMBUDSMAN_PAGE_SIZE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE);

        Ok(Self {
            api_url,
            token,
            log_file,
            page_size,
        })
    }

    /// Validate config (api_url must be a valid URL, page_size one of the offered sizes).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("OMBUDSMAN_API_URL is not a valid URL: {}", self.api_url);
        }
        if !DEFAULT_PAGE_SIZES.contains(&self.page_size) {
            anyhow::bail!(
                "OMBUDSMAN_PAGE_SIZE must be one of {:?}, got {}",
                DEFAULT_PAGE_SIZES,
                self.page_size
            );
        }
        Ok(())
    }

    /// API client for this config, carrying the token when one is set.
    pub fn api_client(&self) -> Result<ApiClient> {
        let mut client = ApiClient::new(self.api_url.as_str())?;
        client.set_token(self.token.clone());
        Ok(client)
    }
}
