use crate::error::{Result, SiteError};
use crate::io;
use crate::notifier::{DEFAULT_CAPACITY, DEFAULT_REMOVE_DELAY_MS};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_site_name() -> String {
    "Sprinova Digital".to_string()
}

fn default_tagline() -> String {
    "Your strategic partner for digital transformation".to_string()
}

fn default_description() -> String {
    "We boost your business through technology and digital marketing.".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
            description: default_description(),
        }
    }
}

// ---------------------------------------------------------------------------
// AiConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Generation model identifier passed to the hosted API.
    #[serde(default = "default_model")]
    pub model: String,
    /// When false, the AI tool endpoints report themselves unavailable even
    /// if an API key is present.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            enabled: true,
        }
    }
}

// ---------------------------------------------------------------------------
// NotificationsConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Maximum simultaneous toasts retained. The product default shows only
    /// the most recent one.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Delay between dismissal and purge, in milliseconds.
    #[serde(default = "default_remove_delay_ms")]
    pub remove_delay_ms: u64,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_remove_delay_ms() -> u64 {
    DEFAULT_REMOVE_DELAY_MS
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            remove_delay_ms: default_remove_delay_ms(),
        }
    }
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3170
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            site: SiteConfig::default(),
            ai: AiConfig::default(),
            notifications: NotificationsConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            version: 1,
            site: SiteConfig {
                name: site_name.into(),
                ..SiteConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(SiteError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Like `load`, but a missing file yields the defaults instead of an
    /// error. Serving the site works without any config on disk.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Ok(cfg) => Ok(cfg),
            Err(SiteError::NotInitialized) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.site.name.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "site.name is blank".to_string(),
            });
        }

        if self.ai.model.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "ai.model is blank; the generation endpoints cannot work".to_string(),
            });
        }

        if self.notifications.capacity == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "notifications.capacity is 0; it will be clamped to 1 at startup"
                    .to_string(),
            });
        }

        if self.notifications.remove_delay_ms < 1_000 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "notifications.remove_delay_ms={} is under one second; dismissed toasts \
                     will be purged almost immediately",
                    self.notifications.remove_delay_ms
                ),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
