//! Server configuration from environment variables.
//!
//! | Variable    | Default     |                                       |
//! |-------------|-------------|---------------------------------------|
//! | `BIND_ADDR` | `127.0.0.1` | interface to listen on                |
//! | `PORT`      | `4567`      | TCP port                              |
//! | `TODO_STORE`| `memory`    | `memory` or `mongo`                   |
//! | `MONGO_ADDR`| `localhost` | MongoDB host, optionally `host:port`  |
//! | `MONGO_DB`  | `dev`       | database holding the `todos` collection |
//! | `TODO_SEED` | unset       | JSON file of todos inserted at startup |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 4567;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got `{0}`")]
    InvalidPort(String),

    #[error("BIND_ADDR must be an IP address, got `{0}`")]
    InvalidBindAddr(String),

    #[error("TODO_STORE must be `memory` or `mongo`, got `{0}`")]
    UnknownStore(String),
}

/// Which storage backend the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Mongo,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "mongo" | "mongodb" => Ok(StoreKind::Mongo),
            _ => Err(ConfigError::UnknownStore(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub store: StoreKind,
    pub mongo_addr: String,
    pub mongo_db: String,
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let store = match lookup("TODO_STORE") {
            Some(raw) => raw.parse::<StoreKind>()?,
            None => StoreKind::Memory,
        };

        Ok(Self {
            bind_addr,
            port,
            store,
            mongo_addr: lookup("MONGO_ADDR").unwrap_or_else(|| "localhost".to_string()),
            mongo_db: lookup("MONGO_DB").unwrap_or_else(|| "dev".to_string()),
            seed_file: lookup("TODO_SEED").map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    pub fn mongo_uri(&self) -> String {
        format!("mongodb://{}", self.mongo_addr)
    }
}
