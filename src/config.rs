use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub flatten: FlattenConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    #[serde(default = "default_chunk_size")]
    pub default_size: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            default_size: default_chunk_size(),
        }
    }
}

fn default_chunk_size() -> usize {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct FlattenConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub prefix: String,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            prefix: String::new(),
        }
    }
}

fn default_separator() -> String {
    crate::flatten::DEFAULT_SEPARATOR.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;
    Ok(config)
}

/// Resolve the effective config: the file if one was given, defaults otherwise.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => load_config(p),
        None => Ok(Config::default()),
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.chunking.default_size == 0 {
        anyhow::bail!("chunking.default_size must be > 0");
    }

    if config.flatten.separator.is_empty() {
        anyhow::bail!("flatten.separator must not be empty");
    }

    Ok(())
}
