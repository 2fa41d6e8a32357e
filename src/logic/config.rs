use crate::utils::config_loader::{ConfigLoader, ConfigLoaderSync, LoadConfigError, load_from_file, load_from_file_sync, parse_config};
use crate::utils::constants::{DEFAULT_MAX_DEPTH, DEFAULT_TOP_K, LIQUIDITY_FACTOR};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct ValuationConfigRoot {
    pub valuation: ValuationConfigSection,
}

/// `[valuation]` section. Defaults reproduce the explorer's behaviour.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ValuationConfigSection {
    /// Maximum hops from a pool coin to the base currency, 0 for unbounded
    pub max_depth: usize,
    /// Number of candidate routes to enumerate per side
    pub top_k: usize,
    /// Multiplier from one base-denominated side to the whole pool
    pub liquidity_factor: u32,
    /// Value snapshots on the rayon pool
    pub parallel: bool,
}

impl ValuationConfigSection {
    pub fn with_max_depth(&self, max_depth: usize) -> Self {
        Self { max_depth, ..self.clone() }
    }

    pub fn with_top_k(&self, top_k: usize) -> Self {
        Self { top_k, ..self.clone() }
    }

    pub fn with_liquidity_factor(&self, liquidity_factor: u32) -> Self {
        Self { liquidity_factor, ..self.clone() }
    }

    pub fn with_parallel(&self, parallel: bool) -> Self {
        Self { parallel, ..self.clone() }
    }

    pub fn from_toml(raw_config: &str) -> Result<Self, LoadConfigError> {
        let root: ValuationConfigRoot = parse_config(raw_config)?;
        root.valuation.validated()
    }

    fn validated(self) -> Result<Self, LoadConfigError> {
        if self.top_k == 0 {
            return Err(LoadConfigError::ConfigError("valuation.top_k must be at least 1".to_string()));
        }
        Ok(self)
    }
}

impl Default for ValuationConfigSection {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, top_k: DEFAULT_TOP_K, liquidity_factor: LIQUIDITY_FACTOR, parallel: true }
    }
}

#[async_trait]
impl ConfigLoader for ValuationConfigSection {
    type SectionType = ValuationConfigSection;

    async fn load_section_from_file(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: ValuationConfigRoot = load_from_file(file_name).await?;
        root.valuation.validated()
    }
}

impl ConfigLoaderSync for ValuationConfigSection {
    type SectionType = ValuationConfigSection;

    fn load_section_from_file_sync(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: ValuationConfigRoot = load_from_file_sync(file_name)?;
        root.valuation.validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_config(name: &str, contents: &str) -> eyre::Result<PathBuf> {
        let path = std::env::temp_dir().join(format!("pool-liquidity-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    #[test]
    fn test_default_config() {
        let config = ValuationConfigSection::default();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.top_k, 1);
        assert_eq!(config.liquidity_factor, 2);
        assert!(config.parallel);
    }

    #[test]
    fn test_partial_section_keeps_defaults() -> eyre::Result<()> {
        let config = ValuationConfigSection::from_toml("[valuation]\nmax_depth = 6\n")?;
        assert_eq!(config, ValuationConfigSection::default().with_max_depth(6));
        Ok(())
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ValuationConfigSection::from_toml("[valuation]\nmax_hops = 6\n");
        assert!(matches!(result, Err(LoadConfigError::TomlError(_))));
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let result = ValuationConfigSection::from_toml("[valuation]\ntop_k = 0\n");
        assert!(matches!(result, Err(LoadConfigError::ConfigError(_))));
    }

    #[test]
    fn test_load_section_sync() -> eyre::Result<()> {
        let path = write_config("sync", "[valuation]\nmax_depth = 3\ntop_k = 2\nliquidity_factor = 1\nparallel = false\n")?;
        let config = ValuationConfigSection::load_section_from_file_sync(path.to_string_lossy().to_string())?;
        std::fs::remove_file(&path)?;

        assert_eq!(config.max_depth, 3);
        assert_eq!(config.top_k, 2);
        assert_eq!(config.liquidity_factor, 1);
        assert!(!config.parallel);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_section_async() -> eyre::Result<()> {
        let path = write_config("async", "[valuation]\nliquidity_factor = 3\n")?;
        let config = ValuationConfigSection::load_section_from_file(path.to_string_lossy().to_string()).await?;
        std::fs::remove_file(&path)?;

        assert_eq!(config.liquidity_factor, 3);
        assert_eq!(config.max_depth, 4);

        Ok(())
    }
}
