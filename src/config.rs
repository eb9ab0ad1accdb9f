//! Configuration for citerite.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (CITERITE_MODE, CITERITE_ENDPOINT, CITERITE_TIMEOUT_SECONDS)
//! 2. Project config file (.citerite/config.yaml, searched upwards from the current directory)
//! 3. User config file (~/.citerite/config.yaml)
//! 4. Defaults (mock service)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_ENDPOINT: &str = "http://localhost:8000/scan";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_MAX_INPUT_BYTES: usize = 65_536;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub service: Option<ServiceConfig>,
    #[serde(default)]
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    pub mode: Option<ServiceMode>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsConfig {
    pub max_input_bytes: Option<usize>,
}

/// Which analysis backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceMode {
    /// Serve the bundled example response
    #[default]
    Mock,
    /// POST to a remote analysis service
    Http,
}

impl std::fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceMode::Mock => write!(f, "mock"),
            ServiceMode::Http => write!(f, "http"),
        }
    }
}

impl std::str::FromStr for ServiceMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(ServiceMode::Mock),
            "http" => Ok(ServiceMode::Http),
            _ => anyhow::bail!("Unknown service mode: {}", s),
        }
    }
}

/// Resolved analysis service settings
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub mode: ServiceMode,
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl ServiceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            mode: ServiceMode::Mock,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub service: ServiceSettings,
    /// Largest input accepted for analysis
    pub max_input_bytes: usize,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            config_file: None,
        }
    }
}

/// Values read from the environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub mode: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            mode: std::env::var("CITERITE_MODE").ok(),
            endpoint: std::env::var("CITERITE_ENDPOINT").ok(),
            timeout_seconds: std::env::var("CITERITE_TIMEOUT_SECONDS").ok(),
        }
    }
}

/// Find project config file by searching current directory and parents
fn find_project_config() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".citerite").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// User-level config file, if present
fn find_user_config() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".citerite").join("config.yaml");
    path.exists().then_some(path)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge a config file and environment overrides over the defaults
fn resolve(
    file: Option<ConfigFile>,
    config_file: Option<PathBuf>,
    env: &EnvOverrides,
) -> Result<ResolvedConfig> {
    let service_file = file
        .as_ref()
        .and_then(|f| f.service.clone())
        .unwrap_or_default();
    let limits_file = file
        .as_ref()
        .and_then(|f| f.limits.clone())
        .unwrap_or_default();

    let mode = match &env.mode {
        Some(mode) => mode.parse::<ServiceMode>().context("Invalid CITERITE_MODE")?,
        None => service_file.mode.unwrap_or_default(),
    };

    let endpoint = env
        .endpoint
        .clone()
        .or(service_file.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let timeout_seconds = match &env.timeout_seconds {
        Some(secs) => secs
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid CITERITE_TIMEOUT_SECONDS: {}", secs))?,
        None => service_file.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
    };
    if timeout_seconds == 0 {
        anyhow::bail!("Service timeout must be at least 1 second");
    }

    Ok(ResolvedConfig {
        service: ServiceSettings {
            mode,
            endpoint,
            timeout_seconds,
        },
        max_input_bytes: limits_file.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES),
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_project_config().or_else(find_user_config);

    let file = match &config_file {
        Some(path) => Some(load_config_file(path)?),
        None => None,
    };

    resolve(file, config_file, &EnvOverrides::from_env())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
