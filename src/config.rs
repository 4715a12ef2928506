use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::OptionalityRule;

pub const CONFIG_FILE_NAME: &str = ".propcheckrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_registry")]
    pub registry: String,
    #[serde(default = "default_alias_prefix")]
    pub alias_prefix: String,
    #[serde(default = "default_alias_root")]
    pub alias_root: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub optionality: OptionalityRule,
}

fn default_registry() -> String {
    "registry.json".to_string()
}

fn default_alias_prefix() -> String {
    "@/".to_string()
}

fn default_alias_root() -> String {
    "src/".to_string()
}

fn default_extension() -> String {
    ".tsx".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            alias_prefix: default_alias_prefix(),
            alias_root: default_alias_root(),
            extension: default_extension(),
            optionality: OptionalityRule::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.registry.is_empty() {
            bail!("'registry' must not be empty");
        }
        if self.alias_prefix.is_empty() {
            bail!("'aliasPrefix' must not be empty");
        }
        if self.extension.is_empty() {
            bail!("'extension' must not be empty");
        }
        Ok(())
    }

    /// Resolve relative `registry` and `aliasRoot` against `root`.
    ///
    /// `aliasRoot` is joined as text so a trailing separator survives.
    pub fn anchor_to(&mut self, root: &Path) {
        if Path::new(&self.registry).is_relative() {
            self.registry = root.join(&self.registry).to_string_lossy().into_owned();
        }
        if Path::new(&self.alias_root).is_relative() {
            self.alias_root = root.join(&self.alias_root).to_string_lossy().into_owned();
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub source: Option<PathBuf>,
    /// Directory holding the config file. Relative config paths are anchored here.
    pub root: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let mut config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;

            let root = path.parent().map(Path::to_path_buf);
            // Paths stay relative when the config sits in the working directory.
            if let Some(root) = root.as_deref().filter(|root| *root != start_dir) {
                config.anchor_to(root);
            }

            Ok(ConfigLoadResult {
                config,
                source: Some(path),
                root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
            root: None,
        }),
    }
}
