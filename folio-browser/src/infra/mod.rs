//! Infrastructure: provider client, configuration, constants and test support

pub mod api_client;
pub mod config;
pub mod constants;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api_client::ApiClient;
pub use config::Config;
