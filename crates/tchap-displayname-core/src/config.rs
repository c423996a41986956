use crate::error::CoreError;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleConfig {
    pub extract_from_email: bool,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            extract_from_email: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModuleConfig {
    extract_from_email: Option<bool>,
}

impl ModuleConfig {
    /// Build a config from the module's block in the host configuration.
    pub fn from_table(table: &toml::Table) -> Result<Self, CoreError> {
        let raw: RawModuleConfig = toml::Value::Table(table.clone())
            .try_into()
            .map_err(|err: toml::de::Error| CoreError::InvalidConfig(err.to_string()))?;
        let mut config = Self::default();
        if let Some(extract) = raw.extract_from_email {
            config.extract_from_email = extract;
        }
        Ok(config)
    }
}
