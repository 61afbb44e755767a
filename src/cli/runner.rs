//! CLI runner - validates flags and drives the fetch

use crate::cli::commands::Cli;
use crate::config::ConfigFile;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::Renderer;
use crate::pagination::PageDriver;
use crate::routes::RouteTable;
use crate::types::FetchSummary;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against stdout
    pub async fn run(&self) -> Result<FetchSummary> {
        self.run_to(std::io::stdout()).await
    }

    /// Run, rendering records to `out`
    ///
    /// Flags are validated and the credential file is loaded before any
    /// request is made.
    pub async fn run_to<W: Write>(&self, out: W) -> Result<FetchSummary> {
        let (config_path, resource) = self.validate()?;

        let config = ConfigFile::load(config_path)?;
        let routes = RouteTable::new().with_routes(config.routes.clone());
        let path = routes.resolve(resource)?;

        let http_config = HttpClientConfig::builder()
            .base_url(&self.cli.base_url)
            .build();
        let client = HttpClient::with_auth(http_config, config.credentials().into())
            .with_context(|| format!("Cannot create client for {}", self.cli.base_url))?;
        debug!("Client ready: {client:?}");

        let mut renderer = Renderer::new(out, self.cli.format);
        PageDriver::new(&client).run(&path, &mut renderer).await
    }

    /// Check that both required flags are usable
    fn validate(&self) -> Result<(&Path, &str)> {
        let config_path = self
            .cli
            .config
            .as_deref()
            .ok_or_else(|| Error::missing_field("--config"))?;

        if !config_path.is_file() {
            return Err(Error::file_not_found(config_path.display().to_string()));
        }

        let resource = self
            .cli
            .get
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| Error::missing_field("--get"))?;

        Ok((config_path, resource))
    }
}
