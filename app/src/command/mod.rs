//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use std::sync::Arc;
use stringlens_config::{Config, StorageBackend};
use stringlens_core::{MemoryStore, RecordStore};
use stringlens_store::DatabaseStore;
use tracing::info;

mod analyze;
mod info;
mod init;
mod serve;
mod translate;
mod version;

pub use analyze::AnalyzeStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use serve::{ServeInput, ServeStrategy};
pub use translate::TranslateStrategy;
pub use version::VersionStrategy;

/// Open the record store selected by the configuration.
async fn open_store(config: &Config, force_memory: bool) -> anyhow::Result<Arc<dyn RecordStore>> {
    if force_memory || config.storage.backend == StorageBackend::Memory {
        info!("Using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    info!("Using database store");
    Ok(Arc::new(DatabaseStore::connect(&config.storage.url).await?))
}

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
