//! Layered application configuration.
//!
//! Priority, lowest to highest: built-in defaults, YAML config file,
//! `TOOLIFY_`-prefixed environment variables, CLI flags (and their env
//! fallbacks).

use std::path::{Path, PathBuf};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::ThemeParseError;
use crate::ui::Theme;

/// Config file looked up in the working directory when none is given.
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,

    /// Theme used when the request carries no theme cookie (light or dark)
    #[arg(long, env = "DEFAULT_THEME")]
    pub theme: Option<String>,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON")]
    pub log_json: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl ServerConfig {
    /// `host:port` string for binding.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub default_theme: Theme,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                static_dir: "static".to_string(),
            },
            ui: UiConfig {
                default_theme: Theme::default(),
            },
            logging: LoggingConfig { json: false },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.static_dir", defaults.server.static_dir)?
            .set_default("ui.default_theme", defaults.ui.default_theme.as_str())?
            .set_default("logging.json", defaults.logging.json)?;

        // An explicit path must exist; the working-directory fallback is optional.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));
        }

        // E.g. TOOLIFY_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("TOOLIFY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(dir) = cli.static_dir {
            builder = builder.set_override("server.static_dir", dir)?;
        }
        if let Some(theme) = cli.theme {
            let theme: Theme = theme
                .parse()
                .map_err(|e: ThemeParseError| config::ConfigError::Message(e.to_string()))?;
            builder = builder.set_override("ui.default_theme", theme.as_str())?;
        }
        if let Some(json) = cli.log_json {
            builder = builder.set_override("logging.json", json)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_joins_host_and_port() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn rejects_unknown_theme_flag() {
        let err = AppConfig::load_from_args(["toolify-web", "--theme", "sepia"]).unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }
}
