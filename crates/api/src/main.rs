//! NutriHub API - HTTP server for the identity and directory services.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_lib::config::ApiConfig;

#[derive(Parser)]
#[command(name = "nutrihub-api")]
#[command(about = "NutriHub API server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "3333")]
        port: u16,
    },
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = ApiConfig::from_env();
            config.host = host;
            config.port = port;
            api_lib::serve(config).await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateAction::Up => store::MigrateAction::Up,
                MigrateAction::Down => store::MigrateAction::Down,
                MigrateAction::Status => store::MigrateAction::Status,
                MigrateAction::Fresh => store::MigrateAction::Fresh,
            };

            let database_url = ApiConfig::database_url_from_env();
            store::run_migrations(&database_url, migrate_action).await?;
        }
    }

    Ok(())
}
