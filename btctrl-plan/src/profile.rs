//! Build profiles: a capability list plus sizing, read from TOML.
//!
//! ```toml
//! capabilities = ["ADVERTISER", "CONNECTION"]
//!
//! [sizing]
//! buffer_memory = 8192
//! max_connections = 4
//! ```

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use btctrl_init::{Capabilities, ControllerConfig};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Flag names (`EXTENDED_ADVERTISER`) or cargo feature names (`extended-advertiser`).
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub sizing: ControllerConfig,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading profile {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing profile {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn capabilities(&self) -> Result<Capabilities> {
        self.capabilities
            .iter()
            .enumerate()
            .try_fold(Capabilities::empty(), |caps, (i, name)| {
                let flag = Capabilities::from_name(name)
                    .or_else(|| Capabilities::from_feature_name(name))
                    .ok_or_else(|| anyhow!("unknown capability `{name}`"))
                    .with_context(|| format!("capabilities[{i}]"))?;
                Ok(caps | flag)
            })
    }
}
