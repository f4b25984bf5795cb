//! Configuration file parsing for .swiftdecl.toml

use crate::collector::Selector;
use crate::decl::DeclarationKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`ExtractConfig::find_and_load`]
pub const CONFIG_FILE_NAME: &str = ".swiftdecl.toml";

/// Main configuration structure for .swiftdecl.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default)]
    pub extract: ExtractSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractSection {
    /// Declaration kinds to collect, spelled as Swift keywords
    /// (`"enum"`, `"case"`, `"func"`, ...). Empty means every kind.
    #[serde(default)]
    pub kinds: Vec<String>,
}

impl ExtractConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ExtractConfig = toml::from_str(contents)?;
        config.selector()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("Invalid {}", path.display()))
    }

    /// Find and load .swiftdecl.toml from `start_dir` or its ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// The selector described by `extract.kinds`
    pub fn selector(&self) -> Result<Selector> {
        let mut kinds = self
            .extract
            .kinds
            .iter()
            .map(|k| k.parse::<DeclarationKind>())
            .collect::<Result<Vec<_>, _>>()?;
        kinds.sort();
        kinds.dedup();

        Ok(match kinds.as_slice() {
            [] => Selector::Any,
            [kind] => Selector::Kind(*kind),
            _ => Selector::AnyOf(kinds),
        })
    }
}
