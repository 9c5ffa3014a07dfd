use std::sync::Arc;
use stringlens_config::Config;
use stringlens_core::StringService;
use tracing::info;

/// Input parameters for the Serve command strategy.
#[derive(Debug, Clone, Default)]
pub struct ServeInput {
    /// Override for `server.host`
    pub host: Option<String>,
    /// Override for `server.port`
    pub port: Option<u16>,
    /// Use the in-memory store regardless of configuration
    pub memory: bool,
}

/// Strategy for running the HTTP API.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = (Config, ServeInput);

    async fn execute(&self, (config, input): Self::Input) -> anyhow::Result<()> {
        let mut server = config.server.clone();
        if let Some(host) = input.host {
            server.host = host;
        }
        if let Some(port) = input.port {
            server.port = port;
        }

        let store = super::open_store(&config, input.memory).await?;
        info!("Store holds {} strings", store.count().await?);

        let service = Arc::new(StringService::new(store));
        stringlens_server::serve(service, &server.bind_address()).await
    }
}
