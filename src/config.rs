//! Engine and service settings.
//!
//! Values are layered from built-in defaults, an optional
//! `position-history.toml` next to the working directory, and
//! `POSITION_HISTORY__*` environment variables (e.g.
//! `POSITION_HISTORY__SERVICE__BIND=0.0.0.0:8080`).

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

pub const CONFIG_FILE: &str = "position-history";
pub const ENV_PREFIX: &str = "POSITION_HISTORY";

/// Property identifiers quoted in explanations.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Properties {
    pub start_date: u32,
    pub end_date: u32,
    pub replaces: u32,
    pub replaced_by: u32,
}
impl Default for Properties {
    fn default() -> Self {
        Self { start_date: 580, end_date: 582, replaces: 1365, replaced_by: 1366 }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Service {
    pub bind: String,
}
impl Default for Service {
    fn default() -> Self {
        Self { bind: String::from("127.0.0.1:8080") }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Nature-of-mandate item that marks an acting (interim) holder.
    pub acting_designation: String,
    /// Prefix of the wiki templates used in metadata explanations.
    pub template_name: String,
    pub properties: Properties,
    pub service: Service,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            acting_designation: String::from("Q4676846"),
            template_name: String::from("PositionHolderHistory"),
            properties: Properties::default(),
            service: Service::default(),
        }
    }
}
impl Config {
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        let loaded: Config = settings.try_deserialize()?;
        debug!(?loaded, "configuration loaded");
        Ok(loaded)
    }
}
