//! Configuration for boekenplank paths and the catalog endpoint.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (BOEKENPLANK_HOME, BOEKENPLANK_API_URL)
//! 2. Config file (.boekenplank/config.yaml)
//! 3. Defaults (~/.boekenplank, https://gutendex.com)
//!
//! Config file discovery:
//! - Searches current directory and parents for .boekenplank/config.yaml
//! - Paths in the config file are relative to the config file's directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::DEFAULT_BASE_URL;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub api: Option<ApiConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Home directory for persisted lists (relative to the config file)
    pub home: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Catalog service endpoint
    pub base_url: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to the boekenplank home (persisted lists live here)
    pub home: PathBuf,
    /// Catalog service endpoint
    pub base_url: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".boekenplank").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".boekenplank");

    let config_file = find_config_file();

    let (home, base_url) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // home is relative to the .boekenplank/ directory
        let boekenplank_dir = config_path.parent().unwrap_or(Path::new("."));

        let home = if let Ok(env_home) = std::env::var("BOEKENPLANK_HOME") {
            PathBuf::from(env_home)
        } else if let Some(ref home_path) = config.paths.home {
            resolve_path(boekenplank_dir, home_path)
        } else {
            default_home.clone()
        };

        let base_url = if let Ok(env_url) = std::env::var("BOEKENPLANK_API_URL") {
            env_url
        } else if let Some(url) = config.api.and_then(|a| a.base_url) {
            url
        } else {
            DEFAULT_BASE_URL.to_string()
        };

        (home, base_url)
    } else {
        let home = std::env::var("BOEKENPLANK_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_home.clone());

        let base_url = std::env::var("BOEKENPLANK_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        (home, base_url)
    };

    Ok(ResolvedConfig {
        home,
        base_url,
        config_file,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Get the boekenplank home directory
pub fn boekenplank_home() -> Result<PathBuf> {
    Ok(config()?.home.clone())
}

/// Get the directory holding the persisted lists ($BOEKENPLANK_HOME/lists)
pub fn lists_dir() -> Result<PathBuf> {
    Ok(config()?.home.join("lists"))
}

/// Get the catalog service endpoint
pub fn base_url() -> Result<String> {
    Ok(config()?.base_url.clone())
}
