//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::services::FeatureGate;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Path to the JSON file holding the template records.
    pub templates_file: String,
    /// Master switch for the thank-you-page feature.
    pub enabled: bool,
}

/// Feature switch backed by the loaded configuration.
#[derive(Clone, Debug)]
pub struct ConfigFeatureGate {
    enabled: bool,
}

impl ConfigFeatureGate {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl From<&ServerConfig> for ConfigFeatureGate {
    fn from(config: &ServerConfig) -> Self {
        Self::new(config.enabled)
    }
}

impl FeatureGate for ConfigFeatureGate {
    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
