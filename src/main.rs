use std::sync::Arc;

use clap::Parser;
use diario::cli::{self, Cli};
use diario_auth::SessionStore;
use diario_config::{ApiConfig, StorageConfig};
use diario_core::FileKeyValueStore;
use diario_observability::{LoggingConfig, init_logging};
use dotenvy::dotenv;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging(&LoggingConfig::from_env());

    let args = Cli::parse();

    let storage = Arc::new(FileKeyValueStore::new(StorageConfig::from_env().dir));
    let session = match SessionStore::new(&ApiConfig::from_env(), storage) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("❌ Invalid API configuration: {}", e);
            std::process::exit(1);
        }
    };

    session.restore().await;

    if let Err(e) = cli::run(&session, args.command).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
