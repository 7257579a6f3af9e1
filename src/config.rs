//! Settings file
//!
//! Optional TOML file; every key has a default and CLI flags win over it.
//!
//! ```toml
//! settle_ms = 300
//! categories = ["man", "pin", "yaku"]
//! seed = 42
//! catalog = "cards.json"
//! ```

use crate::catalog::Category;
use crate::error::Result;
use crate::session::EnabledCategories;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Delay between answering a card and the deck moving on
pub const DEFAULT_SETTLE_MS: u64 = 300;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Settle interval for advance/shuffle, in milliseconds
    pub settle_ms: u64,
    /// Categories enabled at startup; empty means all
    pub categories: Vec<Category>,
    /// Fixed shuffle seed
    pub seed: Option<u64>,
    /// JSON catalog to use instead of the built-in one
    pub catalog: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            settle_ms: DEFAULT_SETTLE_MS,
            categories: Vec::new(),
            seed: None,
            catalog: None,
        }
    }
}

impl Settings {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn enabled(&self) -> EnabledCategories {
        if self.categories.is_empty() {
            EnabledCategories::all()
        } else {
            EnabledCategories::only(&self.categories)
        }
    }
}

/// Parse a comma-separated category list such as `man,pin,yaku`
pub fn parse_categories(list: &str) -> Result<Vec<Category>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<Category>)
        .collect()
}
