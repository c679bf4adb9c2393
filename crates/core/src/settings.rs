use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use ini::Ini;
use tokio::fs::{read_to_string, try_exists};
use tracing::{debug, warn};

use crate::{
    error::{ConfigurationError, Result},
    region_provider::ProviderName,
};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("regioncheck/", env!("CARGO_PKG_VERSION"));

const GENERAL_KEYS: &[&str] = &["timeout_secs", "user_agent"];
const PROVIDER_KEYS: &[&str] = &["url"];

pub const DIGITALOCEAN_REGIONS_URL: &str =
    "https://docs.digitalocean.com/platform/regional-availability/";
pub const LINODE_REGIONS_URL: &str = "https://api.linode.com/v4/object-storage/clusters";
pub const DREAMHOST_REGIONS_URL: &str = "https://help.dreamhost.com/hc/en-us/articles/214432318-Does-DreamObjects-have-an-S3-compatible-API";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub timeout: Duration,
    pub user_agent: String,
    pub digitalocean_url: String,
    pub linode_url: String,
    pub dreamhost_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            digitalocean_url: DIGITALOCEAN_REGIONS_URL.to_string(),
            linode_url: LINODE_REGIONS_URL.to_string(),
            dreamhost_url: DREAMHOST_REGIONS_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn endpoint(&self, provider_name: ProviderName) -> &str {
        match provider_name {
            ProviderName::DigitalOcean => &self.digitalocean_url,
            ProviderName::Linode => &self.linode_url,
            ProviderName::Dreamhost => &self.dreamhost_url,
        }
    }

    fn endpoint_mut(&mut self, provider_name: ProviderName) -> &mut String {
        match provider_name {
            ProviderName::DigitalOcean => &mut self.digitalocean_url,
            ProviderName::Linode => &mut self.linode_url,
            ProviderName::Dreamhost => &mut self.dreamhost_url,
        }
    }
}

pub fn get_settings_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(ConfigurationError::HomeDirectoryNotAvailable)?;
    Ok(home_dir.join(".regioncheck").join("config"))
}

/// Loads settings from `path`, or from `~/.regioncheck/config` when no path
/// is given.
///
/// Only an explicitly requested file has to exist; without one, a missing
/// default file yields [`Settings::default`].
pub async fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (get_settings_path()?, false),
    };

    if !try_exists(&path).await? {
        if required {
            return Err(ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let text = read_to_string(&path).await?;
    debug!(path = %path.display(), "loaded settings file");
    parse_settings(&text)
}

pub fn parse_settings(text: &str) -> Result<Settings> {
    let config = Ini::load_from_str(text).map_err(|error| ConfigurationError::InvalidFile {
        reason: error.to_string(),
    })?;

    for key in unrecognized_keys(&config) {
        warn!(key = %key, "ignoring unrecognized settings key");
    }

    let mut settings = Settings::default();
    let general = config.general_section();

    if let Some(value) = general.get("timeout_secs") {
        let seconds: u64 = value
            .trim()
            .parse()
            .map_err(|_| ConfigurationError::InvalidValue {
                field: "timeout_secs".to_string(),
                reason: format!("`{value}` is not a whole number of seconds"),
            })?;
        if seconds == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        settings.timeout = Duration::from_secs(seconds);
    }

    if let Some(value) = general.get("user_agent") {
        settings.user_agent = value.trim().to_string();
    }

    for provider_name in ProviderName::ALL {
        let Some(section) = config.section(Some(provider_name.as_str())) else {
            continue;
        };
        if let Some(url) = section.get("url") {
            let url = url.trim();
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigurationError::InvalidValue {
                    field: format!("{provider_name}.url"),
                    reason: format!("`{url}` is not an http(s) URL"),
                }
                .into());
            }
            *settings.endpoint_mut(provider_name) = url.to_string();
        }
    }

    Ok(settings)
}

/// Keys the parser does not read, as `key` or `section.key`. Section names
/// are case-sensitive, so `[DigitalOcean]` is reported too.
fn unrecognized_keys(config: &Ini) -> Vec<String> {
    let mut unrecognized = Vec::new();
    for (section, properties) in config.iter() {
        let allowed: &[&str] = match section {
            None => GENERAL_KEYS,
            Some(name) if ProviderName::ALL.iter().any(|p| p.as_str() == name) => PROVIDER_KEYS,
            Some(_) => &[],
        };
        for (key, _) in properties.iter() {
            if allowed.contains(&key) {
                continue;
            }
            unrecognized.push(match section {
                Some(name) => format!("{name}.{key}"),
                None => key.to_string(),
            });
        }
    }
    unrecognized
}
