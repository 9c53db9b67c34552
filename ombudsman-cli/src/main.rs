//! ombud CLI: public feedback form and admin dashboard over the ombudsman API.
//! Config from env (.env supported) and optional CLI args.

use anyhow::Result;
use clap::Parser;
use ombudsman_cli::{commands, load_config, Cli, Commands, ListQuery};
use ombudsman_core::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.api_url, cli.token)?;
    init_tracing(&config.log_file)?;
    info!(
        api_url = %config.api_url,
        has_token = config.token.is_some(),
        "step: ombud starting"
    );

    let client = config.api_client()?;
    let output = match cli.command {
        Commands::Login { username, password } => {
            commands::login(&client, &username, &password).await?
        }
        Commands::Submit {
            content,
            name,
            email,
            message_type,
        } => {
            let message = commands::new_message(content, name, email, message_type.as_deref())?;
            commands::submit(&client, &message).await?
        }
        Commands::List {
            message_type,
            status,
            page,
            per_page,
            window,
        } => {
            let query = ListQuery {
                message_type,
                status,
                page,
                per_page: per_page.unwrap_or(config.page_size),
                window,
            };
            commands::list(client, &query).await?
        }
        Commands::Show { id } => commands::show(&client, &id).await?,
        Commands::Update {
            id,
            status,
            response,
        } => commands::update(client, &id, status.as_deref(), response).await?,
    };

    println!("{}", output);
    Ok(())
}
