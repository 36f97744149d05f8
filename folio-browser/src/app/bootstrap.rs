use folio_model::QueryParameters;
use std::sync::Arc;

use crate::app::runtime::CatalogRuntime;
use crate::domains::catalog::{CatalogDomain, FetchError, FetchSettings};
use crate::infra::api_client::ApiClient;
use crate::infra::config::Config;
use crate::infra::services::api::CatalogService;

/// Everything needed to start a browsing session
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub config: Config,
    pub parameters: QueryParameters,
}

impl AppConfig {
    pub fn new(config: Config, parameters: QueryParameters) -> Self {
        Self { config, parameters }
    }

    /// Layered config (defaults, config file, environment) with the
    /// default query parameters
    pub fn from_environment() -> Self {
        Self::new(Config::load(), QueryParameters::default())
    }

    pub fn server_url(&self) -> &str {
        &self.config.server_url
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings::from(&self.config)
    }
}

/// Build a runtime backed by the HTTP provider client
pub fn boot(config: &AppConfig) -> Result<CatalogRuntime, FetchError> {
    let client = ApiClient::new(config.server_url())?;
    Ok(boot_with_service(config, Arc::new(client)))
}

/// Build a runtime backed by an arbitrary provider
pub fn boot_with_service(
    config: &AppConfig,
    service: Arc<dyn CatalogService>,
) -> CatalogRuntime {
    let domain = CatalogDomain::with_parameters(
        service,
        config.parameters,
        config.fetch_settings(),
    );
    CatalogRuntime::new(domain)
}
