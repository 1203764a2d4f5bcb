use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default User-Agent sent with every request, mimicking a desktop browser.
/// Some wikis and CDNs refuse requests with an obvious bot agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Global configuration loaded from `~/.config/pagepix/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagepixConfig {
    /// Number of concurrent image download workers.
    pub max_workers: usize,
    /// Per-image request timeout in seconds (connect + transfer).
    pub image_timeout_secs: u64,
    /// Default output folder for saved images (relative to the cwd).
    pub output_dir: PathBuf,
    /// Optional User-Agent override; the built-in browser-like string is used when missing.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for PagepixConfig {
    fn default() -> Self {
        Self {
            max_workers: 5,
            image_timeout_secs: 10,
            output_dir: PathBuf::from("fandom_images"),
            user_agent: None,
        }
    }
}

impl PagepixConfig {
    /// The effective User-Agent: the configured override or the built-in default.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagepix")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PagepixConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PagepixConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PagepixConfig = toml::from_str(&data)?;
    Ok(cfg)
}
