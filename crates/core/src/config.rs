use crate::error::{CoreError, Result};
use samscope_api::ClassId;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Universal top type. The only supertype a SAM interface may declare,
    /// and (nullable) the substitute for star projections.
    pub top_type: ClassId,
    pub cache: CacheConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            top_type: ClassId::any(),
            cache: CacheConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Entries kept per cache before it is flushed; `0` means unbounded.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: 4096,
        }
    }
}

impl ResolverConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ResolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_type.as_str().trim().is_empty() {
            return Err(CoreError::InvalidConfig("top_type must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = ResolverConfig::from_json_str(r#"{ "cache": { "enabled": false } }"#).unwrap();
        assert_eq!(config.top_type, ClassId::any());
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.max_entries, 4096);
    }

    #[test]
    fn empty_top_type_is_rejected() {
        let err = ResolverConfig::from_json_str(r#"{ "top_type": " " }"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }
}
