//! Bookkeep - console library management menu

use std::io;
use std::process;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookkeep::{
    config::AppConfig,
    console::{self, Console},
    menu,
    repository::Repository,
    services,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = match AppConfig::load().context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    // Logs go to stderr so they never interleave with the menu on stdout
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookkeep={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Bookkeep v{}", env!("CARGO_PKG_VERSION"));

    let mut repository = match connect(&config).await {
        Ok(repository) => repository,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    println!("Connected to database server successfully!");

    if let Err(e) = services::seed_reference_data(&mut repository).await {
        tracing::debug!("Seeding failed: {:?}", e);
        eprintln!("{}", e);
    }

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    if let Err(e) = menu::run(&mut repository, &mut console, &config.loans).await {
        eprintln!("{}", e);
        process::exit(1);
    }

    if let Err(e) = repository.close().await {
        tracing::warn!("Failed to close database session: {}", e);
    }
}

/// Ask for the password and open the one session used for the whole run.
async fn connect(config: &AppConfig) -> anyhow::Result<Repository> {
    let password =
        console::read_password(&config.database.username).context("Failed to read password")?;
    let repository = Repository::connect(&config.database, &password).await?;
    Ok(repository)
}
