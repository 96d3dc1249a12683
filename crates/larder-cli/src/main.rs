use anyhow::Result;
use clap::Parser;
use larder_cli::commands::{self, App};
use larder_cli::config::{Cli, Command};
use larder_store::create_store;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store_config = cli.store_config();
    debug!("store config: {store_config:?}");
    let app = App::new(create_store(&store_config));

    match cli.command {
        Command::Generate(args) => commands::generate(&app, args).await,
        Command::Filter(args) => commands::filter(args),
        Command::Catalog(args) => commands::catalog(args),
        Command::Show(args) => commands::show(&app, args).await,
        Command::Recommend(args) => commands::recommend(args).await,
        Command::Favorites(command) => commands::favorites(&app, command).await,
        Command::Export(args) => commands::export(&app, args).await,
    }
}
