use anyhow::Result;
use autotag::{
    auth::StaticAuthorizer,
    client::OpenAiTagProvider,
    config::Config,
    handler::TagRequestHandler,
    models::CallerIdentity,
    storage::DirectoryFileStore,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "autotag")]
#[command(about = "AutoTag — sends a course resource's attached PDF to OpenAI and suggests topical tags")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request tags for the first PDF attached to a resource
    Tag {
        /// ID of the resource to tag
        #[arg(long, value_name = "ID")]
        resource_id: u64,
        /// Storage root holding one directory per resource (overrides config)
        #[arg(long)]
        storage_root: Option<PathBuf>,
        /// OpenAI API key (overrides config and env)
        #[arg(long)]
        api_key: Option<String>,
        /// Model to use (overrides config)
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("autotag=info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration (falls back to defaults if not found)
    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Tag {
            resource_id,
            storage_root,
            api_key,
            model,
        } => {
            let storage_root = storage_root
                .unwrap_or_else(|| PathBuf::from(config.storage.root.clone()));
            let api_key = api_key.or_else(|| config.openai_api_key());
            let model = model.unwrap_or_else(|| config.openai.model.clone());

            let provider = OpenAiTagProvider::new(api_key.clone())
                .with_model(model)
                .with_base_url(config.openai.base_url.clone())
                .with_timeout(Duration::from_secs(config.openai.timeout_secs));

            // The CLI runs as the storage owner; hosts embedding the
            // library wire in their own Authorizer.
            let handler = TagRequestHandler::new(
                Arc::new(DirectoryFileStore::new(storage_root)),
                Arc::new(StaticAuthorizer::allow_all()),
                Arc::new(provider),
                api_key,
            );

            let caller = CallerIdentity::new("cli");
            let tags = handler.handle(resource_id, &caller).await?;

            println!("Tags for resource {}:", resource_id);
            for tag in &tags {
                println!("  {}", tag);
            }
        }
    }

    Ok(())
}
