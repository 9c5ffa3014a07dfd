mod schema;

pub use schema::{Config, LoggingConfig, ServerConfig, StorageBackend, StorageConfig};
