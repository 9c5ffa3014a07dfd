#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    AnalyzeStrategy, CommandStrategy, InfoStrategy, InitStrategy, ServeInput, ServeStrategy,
    TranslateStrategy, VersionStrategy,
};
use stringlens_config::Config;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "stringlens")]
#[command(about = "String analysis service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Keep strings in memory instead of the configured backend
        #[arg(long)]
        memory: bool,
    },
    /// Analyze a string and print its properties
    Analyze {
        /// The string to analyze
        value: String,
    },
    /// Show how a natural language query is translated into filters
    Translate {
        /// The query, e.g. "single word palindromic strings"
        query: String,
    },
    /// Initialize configuration
    Init,
    /// Show configuration and storage status
    Info,
    /// Show version
    Version,
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, from_file) = Config::load_or_default()?;
    init_tracing(&config.logging.level)?;
    if !from_file {
        info!(
            "No config file at {}, using defaults",
            Config::config_path()?.display()
        );
    }

    match cli.command {
        Commands::Serve { host, port, memory } => {
            ServeStrategy
                .execute((config, ServeInput { host, port, memory }))
                .await?;
        }
        Commands::Analyze { value } => AnalyzeStrategy.execute(value).await?,
        Commands::Translate { query } => TranslateStrategy.execute(query).await?,
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Info => InfoStrategy.execute(config).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
