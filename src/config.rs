use crate::errors::ConfigError;
use reqwest::Url;
use std::{env, net::SocketAddr, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENDPOINT: &str = "db.json";

/// Where films are read from or written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Http(Url),
    File(PathBuf),
}

impl Endpoint {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Endpoint::Http(url)),
            Err(err) if has_http_scheme(raw) => Err(ConfigError::Url {
                value: raw.to_string(),
                reason: err.to_string(),
            }),
            _ => Ok(Endpoint::File(PathBuf::from(raw))),
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Endpoint::Http(url) => Some(url),
            Endpoint::File(_) => None,
        }
    }
}

fn has_http_scheme(raw: &str) -> bool {
    raw.split_once("://").is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    })
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub read_endpoint: Endpoint,
    /// `None` means writes are only logged.
    pub write_endpoint: Option<Url>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("PORT").ok(),
            env::var("FILMS_ENDPOINT").ok(),
            env::var("FILMS_WRITE_ENDPOINT").ok(),
        )
    }

    pub fn from_values(
        port: Option<String>,
        read: Option<String>,
        write: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Port(value))?,
            None => DEFAULT_PORT,
        };

        let read_endpoint = Endpoint::parse(read.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;

        let write_endpoint = match write.filter(|value| !value.trim().is_empty()) {
            Some(value) => match Endpoint::parse(&value)? {
                Endpoint::Http(url) => Some(url),
                Endpoint::File(_) => return Err(ConfigError::WriteEndpoint(value)),
            },
            None => read_endpoint.as_url().cloned(),
        };

        Ok(Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            read_endpoint,
            write_endpoint,
        })
    }
}
