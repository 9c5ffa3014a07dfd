use stringlens_config::{Config, StorageBackend};
use stringlens_core::QueryTranslator;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location
/// - Server address
/// - Storage backend, URL (password masked) and connection status
/// - Logging level
/// - The natural language rule table
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        println!("=== stringlens Configuration ===\n");

        println!("Config File:");
        let path = Config::config_path()?;
        if path.exists() {
            println!("  {}", path.display());
        } else {
            println!("  {} (not found, using defaults)", path.display());
        }
        println!();

        println!("Server:");
        println!("  Address: {}", config.server.bind_address());
        println!();

        println!("Storage:");
        match config.storage.backend {
            StorageBackend::Memory => println!("  Backend: memory"),
            StorageBackend::Database => {
                println!("  Backend: database");
                println!("  URL: {}", mask_database_url(&config.storage.url));
            }
        }

        info!("Testing store connection");
        match super::open_store(&config, false).await {
            Ok(store) => {
                println!("  Status: Connected");
                match store.count().await {
                    Ok(count) => println!("  Records: {count}"),
                    Err(e) => println!("  Records: unavailable ({e})"),
                }
            }
            Err(e) => {
                println!("  Status: Connection failed");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        println!();

        println!("Query Rules:");
        for rule in QueryTranslator::with_defaults().rules() {
            println!("  {:<24} {}", rule.name(), rule.pattern());
        }

        Ok(())
    }
}

fn mask_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    let Some((credentials, after_at)) = rest.split_once('@') else {
        return url.to_string();
    };

    let Some((username, _password)) = credentials.split_once(':') else {
        return url.to_string();
    };

    format!("{scheme}://{username}:***@{after_at}")
}
