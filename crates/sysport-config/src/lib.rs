//! # sysport-config
//!
//! Configuration management for sysport.
//!
//! Loads configuration from:
//! 1. `~/.sysport/config.toml` (global)
//! 2. `.sysport/config.toml` (project-local, overrides global)
//! 3. Environment variables (highest priority)
//!
//! An explicit config file replaces steps 1 and 2.

pub mod logging;
pub mod path;
pub mod testing;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use sysport_core::{Catalog, Profile, SourceDir, TokenMap};
use tracing::debug;

use crate::logging::Component;

pub const ENV_GO: &str = "SYSPORT_GO";
pub const ENV_GOROOT: &str = "SYSPORT_GOROOT";
pub const ENV_WORKDIR: &str = "SYSPORT_WORKDIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML render error: {0}")]
    Render(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory to switch into before generating; relative paths below
    /// resolve against it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workdir: Option<PathBuf>,
    pub toolchain: ToolchainConfig,
    pub tokens: TokenMap,
    pub syscall: CatalogConfig,
    pub unix: CatalogConfig,
}

impl Config {
    /// Load config from standard locations
    pub fn load() -> Result<Self> {
        let mut layers = Vec::new();

        // 1. Global config (~/.sysport/config.toml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                layers.push(global_path);
            }
        }

        // 2. Project config (.sysport/config.toml) - overrides global
        let project_path = Self::project_config_path();
        if project_path.exists() {
            layers.push(project_path);
        }

        // 3. Environment variable overrides (applied by load_layers)
        Self::load_layers(&layers[..])
    }

    /// Load a single explicit config file, then environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_layers(&[path])
    }

    /// Merge config files key by key, later files winning, then apply
    /// environment overrides.
    ///
    /// A key only overrides when a later file actually sets it; fields left
    /// out of a table keep the value from the earlier layer.
    pub fn load_layers<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut merged = toml::Table::new();
        for path in paths {
            let path = path.as_ref();
            debug!(component = Component::CONFIG, "Loading config layer from {:?}", path);
            let contents = std::fs::read_to_string(path)?;
            merge_tables(&mut merged, toml::from_str(&contents)?);
        }

        let mut config: Config = toml::Value::Table(merged).try_into()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Global config path: ~/.sysport/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".sysport/config.toml"))
    }

    /// Project config path, relative to the invocation directory
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".sysport/config.toml")
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup (the environment, in practice)
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(go) = lookup(ENV_GO).filter(|v| !v.is_empty()) {
            self.toolchain.go = go;
        }
        if let Some(root) = lookup(ENV_GOROOT).filter(|v| !v.is_empty()) {
            self.toolchain.goroot = Some(PathBuf::from(root));
        }
        if let Some(dir) = lookup(ENV_WORKDIR).filter(|v| !v.is_empty()) {
            self.workdir = Some(PathBuf::from(dir));
        }
    }

    pub fn catalog(&self, catalog: Catalog) -> &CatalogConfig {
        match catalog {
            Catalog::Syscall => &self.syscall,
            Catalog::Unix => &self.unix,
        }
    }

    /// Build the generator profile for `catalog`, with config overrides applied
    pub fn profile(&self, catalog: Catalog) -> Profile {
        let section = self.catalog(catalog);
        let mut profile =
            Profile::for_catalog(catalog, self.tokens.clone()).with_files(section.files.clone());
        if let Some(dir) = &section.source_dir {
            profile = profile.with_source(SourceDir::Path(dir.clone()));
        }
        if let Some(dir) = &section.output_dir {
            profile = profile.with_output_dir(dir);
        }
        profile
    }

    /// GOROOT from config, or from `<go> env GOROOT`
    pub fn resolve_goroot(&self) -> sysport_core::Result<PathBuf> {
        match &self.toolchain.goroot {
            Some(root) => Ok(root.clone()),
            None => sysport_core::toolchain::resolve_goroot(&self.toolchain.go),
        }
    }

    /// Generate default config TOML string
    pub fn default_toml() -> Result<String> {
        Self::default().to_toml()
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Go toolchain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// `go` binary used to resolve GOROOT
    pub go: String,
    /// Explicit GOROOT; skips running `go env GOROOT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goroot: Option<PathBuf>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            go: "go".to_string(),
            goroot: None,
        }
    }
}

/// Per-catalog overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Source directory (default: built-in per catalog)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,
    /// Output directory (default: built-in per catalog)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Ordered file list; empty means the built-in catalog
    pub files: Vec<String>,
}

/// Overlay `overlay` onto `base`: tables merge recursively, every other
/// value (arrays included) replaces what was there.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(table)) => {
                merge_tables(existing, table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
