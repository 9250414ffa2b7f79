use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `database_path`.
pub const DATABASE_ENV: &str = "PAGECHECK_DATABASE";

/// Page fetch parameters (`[fetch]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Upper bound on the whole GET, including redirects and body transfer.
    pub timeout_secs: u64,
    /// Upper bound on establishing the TCP/TLS connection.
    pub connect_timeout_secs: u64,
    /// Maximum redirects followed before the fetch fails.
    pub max_redirects: u32,
    /// `User-Agent` sent with every check.
    pub user_agent: String,
    /// Bodies larger than this are truncated before HTML parsing.
    pub max_body_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            connect_timeout_secs: 5,
            max_redirects: 10,
            user_agent: concat!("pagecheck/", env!("CARGO_PKG_VERSION")).to_string(),
            max_body_bytes: 5 * 1024 * 1024,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Global configuration loaded from `~/.config/pagecheck/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagecheckConfig {
    /// SQLite database file. None = `~/.local/state/pagecheck/pagecheck.db`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl PagecheckConfig {
    /// Database location: `PAGECHECK_DATABASE` wins over the config file.
    pub fn resolved_database_path(&self) -> Option<PathBuf> {
        std::env::var_os(DATABASE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.database_path.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagecheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PagecheckConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<PagecheckConfig> {
    if !path.exists() {
        let default_cfg = PagecheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: PagecheckConfig = toml::from_str(&data)?;
    Ok(cfg)
}
