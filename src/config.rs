// Configuration for leadline, read from ~/.config/leadline/config.toml

mod types;

pub use types::{ApiConfig, Config, NotificationConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Loaded configuration plus a message for the user when the file was unusable
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn fallback(warning: String) -> Self {
        log::error!("{}", warning);
        ConfigResult {
            config: Config::default(),
            warning: Some(warning),
        }
    }
}

/// Load the user's config file. Never fails: problems degrade to defaults.
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> ConfigResult {
    // A missing file is the normal first-run case and gets no warning
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("No config at {:?}, using defaults", config_path);
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => return ConfigResult::fallback(format!("Failed to read config: {}", e)),
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Loaded config from {:?}: {:?}", config_path, config);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => ConfigResult::fallback(format!("Invalid config: {}", e)),
    }
}

/// ~/.config/leadline/config.toml, on every platform
fn get_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".config").join("leadline").join("config.toml")
}
