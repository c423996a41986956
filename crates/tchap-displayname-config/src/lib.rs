use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tchap_displayname_core::{CoreError, ModuleConfig};
use thiserror::Error;

const APP_DIR: &str = "tchap-displayname";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Core {
        path: PathBuf,
        #[source]
        source: CoreError,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// The file holds the module block either at the top level or under
/// `[email_displayname]`, the way it sits in a host's module list.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    email_displayname: Option<toml::Table>,
    #[serde(flatten)]
    top_level: toml::Table,
}

/// Where the config comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed on the command line; must exist.
    Explicit(PathBuf),
    /// The per-user location; may be absent.
    Default(PathBuf),
    /// No home directory to look in.
    Unavailable,
}

pub fn locate(custom: Option<PathBuf>) -> Result<ConfigSource> {
    if let Some(path) = custom {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        return Ok(ConfigSource::Explicit(path));
    }
    Ok(default_config_path().map_or(ConfigSource::Unavailable, ConfigSource::Default))
}

// An empty XDG_CONFIG_HOME counts as unset.
fn default_config_path() -> Option<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => dirs::home_dir()?.join(".config"),
    };
    Some(base.join(APP_DIR).join(CONFIG_FILENAME))
}

pub fn load(source: &ConfigSource) -> Result<ModuleConfig> {
    let loaded = match source {
        ConfigSource::Explicit(path) => load_at_path(path, true)?,
        ConfigSource::Default(path) => load_at_path(path, false)?,
        ConfigSource::Unavailable => None,
    };
    Ok(loaded.unwrap_or_default())
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<ModuleConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let config = module_config(parsed).map_err(|source| ConfigError::Core {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

fn module_config(parsed: ConfigFile) -> std::result::Result<ModuleConfig, CoreError> {
    match parsed.email_displayname {
        Some(section) => {
            if let Some(key) = parsed.top_level.keys().next() {
                return Err(CoreError::InvalidConfig(format!("unknown field `{key}`")));
            }
            ModuleConfig::from_table(&section)
        }
        None => ModuleConfig::from_table(&parsed.top_level),
    }
}

#[cfg(test)]
mod tests {
    use super::{load, load_at_path, locate, module_config, ConfigError, ConfigFile, ConfigSource};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse(source: &str) -> ConfigFile {
        toml::from_str(source).expect("parse config")
    }

    #[test]
    fn module_config_defaults_when_empty() {
        let config = module_config(parse("")).expect("config");
        assert!(config.extract_from_email);
    }

    #[test]
    fn module_config_reads_top_level() {
        let config = module_config(parse("extract_from_email = false\n")).expect("config");
        assert!(!config.extract_from_email);
    }

    #[test]
    fn module_config_reads_section() {
        let config = module_config(parse("[email_displayname]\nextract_from_email = false\n"))
            .expect("config");
        assert!(!config.extract_from_email);
    }

    #[test]
    fn module_config_rejects_keys_outside_section() {
        let parsed = parse("extract_from_email = true\n[email_displayname]\n");
        assert!(module_config(parsed).is_err());
    }

    #[test]
    fn locate_keeps_explicit_path() {
        let path = PathBuf::from("/etc/tchap/module.toml");
        let source = locate(Some(path.clone())).expect("locate");
        assert_eq!(source, ConfigSource::Explicit(path));
    }

    #[test]
    fn locate_rejects_empty_explicit_path() {
        let err = locate(Some(PathBuf::new())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfigPath(_)));
    }

    #[test]
    fn load_uses_defaults_without_home() {
        let config = load(&ConfigSource::Unavailable).expect("load");
        assert!(config.extract_from_email);
    }

    #[test]
    fn load_treats_missing_default_file_as_defaults() {
        let temp = TempDir::new().expect("tempdir");
        let source = ConfigSource::Default(temp.path().join("config.toml"));
        assert!(load(&source).expect("load").extract_from_email);
    }

    #[test]
    fn load_requires_explicit_file() {
        let temp = TempDir::new().expect("tempdir");
        let source = ConfigSource::Explicit(temp.path().join("config.toml"));
        assert!(matches!(load(&source), Err(ConfigError::MissingConfigFile(_))));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_default() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "extract_from_email = false\n").expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert!(!config.extract_from_email);
    }

    #[test]
    fn load_at_path_rejects_unknown_fields() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "extract_from_mail = false\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Core { .. }));
    }

    #[test]
    fn load_at_path_reports_parse_errors() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "extract_from_email = \n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
