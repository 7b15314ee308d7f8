use anyhow::Result;
use clap::{Parser, Subcommand};
use notehub_api::{ApiClient, ApiConfig};
use notehub_core::DEFAULT_PER_PAGE;
use notehub_query::QueryClient;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "notehub")]
#[command(about = "Terminal client for the NoteHub notes API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive browser: search, paginate, create, and delete notes
    Browse,
    /// Print one page of notes as JSON
    List {
        #[arg(short, long, default_value = "1")]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: u32,
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Create a note
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "Todo")]
        tag: String,
    },
    /// Delete a note by id
    Delete {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::from_env()?;
    let api = ApiClient::new(config)?;
    let client = Arc::new(QueryClient::new(Arc::new(api)));

    match cli.command {
        Commands::Browse => commands::browse::run(client).await,
        Commands::List { page, per_page, search } => {
            commands::list::run(&client, page, per_page, search).await
        },
        Commands::Create { title, content, tag } => {
            commands::create::run(&client, &title, &content, &tag).await
        },
        Commands::Delete { id } => commands::delete::run(&client, &id).await,
    }
}
