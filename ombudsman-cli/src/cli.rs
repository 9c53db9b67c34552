//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::DeskConfig;

#[derive(Parser)]
#[command(name = "ombud")]
#[command(about = "Ombudsman desk: public feedback form and admin triage", long_about = None)]
#[command(version)]
pub struct Cli {
    /// API base URL (overrides OMBUDSMAN_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Admin bearer token (overrides OMBUDSMAN_TOKEN).
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in as administrator and print the token to export as OMBUDSMAN_TOKEN.
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Send a message through the public feedback form.
    Submit {
        #[arg(short, long)]
        content: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        /// suggestion, complaint, compliment, report or other.
        #[arg(short = 't', long = "type")]
        message_type: Option<String>,
    },
    /// List messages with filters and pagination (admin).
    List {
        /// Message type, or `all`.
        #[arg(short = 't', long = "type")]
        message_type: Option<String>,
        /// Message status, or `all`.
        #[arg(short, long)]
        status: Option<String>,
        #[arg(long, default_value = "1")]
        page: usize,
        /// One of 5, 10, 25, 50 (default from OMBUDSMAN_PAGE_SIZE).
        #[arg(long)]
        per_page: Option<usize>,
        /// How many page numbers to show around the current page.
        #[arg(long, default_value = "5")]
        window: usize,
    },
    /// Show one message in full (admin).
    Show { id: String },
    /// Change status and/or answer a message (admin).
    Update {
        id: String,
        #[arg(short, long)]
        status: Option<String>,
        #[arg(short, long)]
        response: Option<String>,
    },
}

/// Load DeskConfig from environment; `api_url` and `token` override the env values.
pub fn load_config(api_url: Option<String>, token: Option<String>) -> Result<DeskConfig> {
    let config = DeskConfig::load(api_url, token)?;
    config.validate()?;
    Ok(config)
}
