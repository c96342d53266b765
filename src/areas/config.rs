//! Repository configuration
//!
//! `.nit/config` is a JSON document carrying the committer identity and the
//! named remote records. Loaded fresh at the start of each operation and
//! written back in full on change.

use crate::artifacts::remote::Remote;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub remotes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Config {
    /// The free-text author recorded on commits: `Name <email>`, or the
    /// empty string when no identity is configured.
    pub fn author_line(&self) -> String {
        match (&self.user.name, &self.user.email) {
            (None, None) => String::new(),
            (name, email) => format!(
                "{} <{}>",
                name.as_deref().unwrap_or_default(),
                email.as_deref().unwrap_or_default()
            ),
        }
    }

    pub fn remote(&self, name: &str) -> Option<Remote> {
        self.remotes
            .get(name)
            .map(|url| Remote::new(name.to_string(), url.clone()))
    }
}

/// Durable store for [`Config`].
#[derive(Debug)]
pub struct ConfigStore {
    path: Box<Path>,
}

impl ConfigStore {
    pub fn new(path: Box<Path>) -> Self {
        ConfigStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config; a missing file is an empty config.
    pub fn load(&self) -> anyhow::Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.path).context(format!(
            "Unable to read config file {}",
            self.path.display()
        ))?;

        serde_json::from_str(&content).context("Invalid config file")
    }

    pub fn save(&self, config: &Config) -> anyhow::Result<()> {
        let content =
            serde_json::to_string_pretty(config).context("Unable to encode config")?;

        std::fs::write(&self.path, content).context(format!(
            "Unable to write config file {}",
            self.path.display()
        ))
    }
}
