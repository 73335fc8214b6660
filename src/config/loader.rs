use super::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "BURROW_CONFIG";

impl Config {
    /// Load from `BURROW_CONFIG` when set, else start from defaults; then
    /// layer environment overrides and validate.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load_from(Path::new(&path))?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}
