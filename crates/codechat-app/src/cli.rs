//! CLI argument definitions for the codechat binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Codechat - terminal chat client for the codechat assistant backend.
#[derive(Parser, Debug)]
#[command(name = "codechat", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open an interactive chat session.
    Chat {
        /// Backend base URL, e.g. http://127.0.0.1:8001.
        #[arg(short = 'u', long = "url")]
        url: Option<String>,
    },
    /// Run the reference backend.
    Serve {
        /// Port to listen on.
        #[arg(short = 'p', long = "port")]
        port: Option<u16>,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > CODECHAT_CONFIG env var > ~/.codechat/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("CODECHAT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level. `None` means "use the config file value".
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Backend URL for `chat`.
///
/// Priority: --url flag > CODECHAT_URL env var > config file value.
pub fn resolve_url(flag: Option<&str>, config_url: &str) -> String {
    pick_url(flag, std::env::var("CODECHAT_URL").ok(), config_url)
}

/// Listen port for `serve`.
///
/// Priority: --port flag > CODECHAT_PORT env var > config file value > 8001.
pub fn resolve_port(flag: Option<u16>, config_port: u16) -> u16 {
    pick_port(flag, std::env::var("CODECHAT_PORT").ok(), config_port)
}

fn pick_url(flag: Option<&str>, env: Option<String>, config_url: &str) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    if let Some(url) = env.filter(|u| !u.trim().is_empty()) {
        return url;
    }
    config_url.to_string()
}

fn pick_port(flag: Option<u16>, env: Option<String>, config_port: u16) -> u16 {
    if let Some(p) = flag {
        return p;
    }
    if let Some(p) = env.and_then(|v| v.parse::<u16>().ok()) {
        return p;
    }
    if config_port != 0 {
        return config_port;
    }
    8001
}

fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".codechat").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".codechat").join("config.toml");
    }
    PathBuf::from("config.toml")
}
