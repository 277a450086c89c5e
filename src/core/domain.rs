use std::fmt;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// ServerMode selects how the router is served
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ServerMode {
    Local,
    Lambda,
}

impl TryFrom<&str> for ServerMode {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(ServerMode::Local),
            "lambda" => Ok(ServerMode::Lambda),
            other => Err(LibraryError::validation(
                format!("unknown server mode {}", other).as_str(), Some("BOOKS_SERVER_MODE".to_string()))),
        }
    }
}

impl Display for ServerMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ServerMode::Local => write!(f, "local"),
            ServerMode::Lambda => write!(f, "lambda"),
        }
    }
}

// Configuration abstracts config options for the book service
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub stage: String,
    pub host: String,
    pub port: u16,
    pub seed_books: bool,
    pub server_mode: ServerMode,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(stage: &str) -> Self {
        Configuration {
            stage: stage.to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            seed_books: true,
            server_mode: ServerMode::Local,
            json_logs: false,
        }
    }

    /// Loads `.env` (if any) and reads the `BOOKS_*` variables from the process environment.
    pub fn from_env() -> LibraryResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup, starting from the defaults.
    pub fn from_vars<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup("BOOKS_STAGE").unwrap_or_else(|| "dev".to_string()).as_str());
        if let Some(host) = lookup("BOOKS_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("BOOKS_PORT") {
            config.port = port.trim().parse::<u16>().map_err(|err| LibraryError::validation(
                format!("invalid port {}: {}", port, err).as_str(), Some("BOOKS_PORT".to_string())))?;
        }
        if let Some(seed) = lookup("BOOKS_SEED") {
            config.seed_books = parse_flag("BOOKS_SEED", seed.as_str())?;
        }
        config.server_mode = match lookup("BOOKS_SERVER_MODE") {
            Some(mode) => ServerMode::try_from(mode.trim())?,
            None if lookup("AWS_LAMBDA_RUNTIME_API").is_some() => ServerMode::Lambda,
            None => ServerMode::Local,
        };
        if let Some(format) = lookup("BOOKS_LOG_FORMAT") {
            config.json_logs = format.trim().eq_ignore_ascii_case("json");
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> LibraryResult<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse::<SocketAddr>().map_err(|err| LibraryError::validation(
            format!("invalid bind address {}:{}: {}", self.host, self.port, err).as_str(), Some("BOOKS_HOST".to_string())))
    }
}

fn parse_flag(key: &str, value: &str) -> LibraryResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LibraryError::validation(
            format!("invalid flag {} for {}", other, key).as_str(), Some(key.to_string()))),
    }
}
