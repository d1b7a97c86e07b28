//! Configuration management for warehouse-mapper.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::{ColorStrategy, DEFAULT_ALPHA};
use crate::error::{MapperError, Result};
use crate::render::{DEFAULT_POINT_RADIUS, MAX_POINT_RADIUS, MIN_POINT_RADIUS};
use crate::table::HeaderMode;

/// Command-line arguments for warehouse-mapper
#[derive(Parser, Debug)]
#[command(name = "warehouse-mapper")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file to preload and serve (latitude in column A, longitude in column B)
    pub csv_file: Option<PathBuf>,

    /// Host address to bind to
    #[arg(short = 'H', long, env = "MAPPER_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "MAPPER_PORT")]
    pub port: Option<u16>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "MAPPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MAPPER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Header handling for input tables (auto, present, absent)
    #[arg(long, env = "MAPPER_HEADER")]
    pub header: Option<String>,

    /// Color generation strategy (sweep, random)
    #[arg(long, env = "MAPPER_COLOR_STRATEGY")]
    pub color_strategy: Option<String>,

    /// Alpha channel for swept colors (0-255)
    #[arg(long, env = "MAPPER_ALPHA")]
    pub alpha: Option<u8>,

    /// Point radius in meters
    #[arg(long, env = "MAPPER_POINT_RADIUS")]
    pub point_radius: Option<u32>,

    /// Seed for the random color strategy
    #[arg(long, env = "MAPPER_RANDOM_SEED")]
    pub random_seed: Option<u64>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted upload body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

/// Map and color configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Header handling for input tables
    #[serde(default)]
    pub header_mode: HeaderMode,

    /// Color generation strategy for rows without a color
    #[serde(default)]
    pub color_strategy: ColorStrategy,

    /// Alpha channel for swept colors
    #[serde(default = "default_alpha")]
    pub alpha: u8,

    /// Point radius in meters
    #[serde(default = "default_point_radius")]
    pub point_radius: u32,

    /// Seed for the random strategy (None = fresh randomness per request)
    #[serde(default)]
    pub random_seed: Option<u64>,
}

/// Dataset configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV file preloaded at startup
    #[serde(default)]
    pub file_path: Option<PathBuf>,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Map configuration
    #[serde(default)]
    pub map: MapConfig,

    /// Data configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from already-parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }
        if let Some(header) = args.header {
            config.map.header_mode = header.parse()?;
        }
        if let Some(strategy) = args.color_strategy {
            config.map.color_strategy = strategy.parse()?;
        }
        if let Some(alpha) = args.alpha {
            config.map.alpha = alpha;
        }
        if let Some(radius) = args.point_radius {
            config.map.point_radius = radius;
        }
        if args.random_seed.is_some() {
            config.map.random_seed = args.random_seed;
        }
        if args.csv_file.is_some() {
            config.data.file_path = args.csv_file;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server = other.server;
        self.map = other.map;
        if other.data.file_path.is_some() {
            self.data.file_path = other.data.file_path;
        }
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(MapperError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // Validate port (0 is not a valid port for users)
        if self.server.port == 0 {
            return Err(MapperError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.server.max_upload_bytes == 0 {
            return Err(MapperError::Config {
                message: "Maximum upload size cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(MapperError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        validate_point_radius(self.map.point_radius).map_err(|e| MapperError::Config {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

/// Check a point radius against the supported range
pub fn validate_point_radius(radius: u32) -> Result<()> {
    if !(MIN_POINT_RADIUS..=MAX_POINT_RADIUS).contains(&radius) {
        return Err(MapperError::InvalidParameter {
            param: "radius".to_string(),
            message: format!(
                "Point radius {} is outside the range {} to {} meters",
                radius, MIN_POINT_RADIUS, MAX_POINT_RADIUS
            ),
        });
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            map: MapConfig::default(),
            data: DataConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            header_mode: HeaderMode::default(),
            color_strategy: ColorStrategy::default(),
            alpha: default_alpha(),
            point_radius: default_point_radius(),
            random_seed: None,
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_alpha() -> u8 {
    DEFAULT_ALPHA
}

fn default_point_radius() -> u32 {
    DEFAULT_POINT_RADIUS
}

fn default_log_level() -> String {
    "info".to_string()
}
