use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_BULK_QUANTITY: usize = 1000;
const DEFAULT_MAX_DRAW_COUNT: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Upper bounds applied to caller-supplied counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_bulk_quantity: usize,
    pub max_draw_count: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_bulk_quantity: DEFAULT_MAX_BULK_QUANTITY,
            max_draw_count: DEFAULT_MAX_DRAW_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub seed_demo_data: bool,
    pub limits: Limits,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Unset
    /// variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: parse_or("HOST", lookup("HOST"), DEFAULT_HOST)?,
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?,
            seed_demo_data: parse_flag("SEED_DEMO_DATA", lookup("SEED_DEMO_DATA"), true)?,
            limits: Limits {
                max_bulk_quantity: parse_or(
                    "MAX_BULK_QUANTITY",
                    lookup("MAX_BULK_QUANTITY"),
                    DEFAULT_MAX_BULK_QUANTITY,
                )?,
                max_draw_count: parse_or(
                    "MAX_DRAW_COUNT",
                    lookup("MAX_DRAW_COUNT"),
                    DEFAULT_MAX_DRAW_COUNT,
                )?,
            },
        })
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn invalid(name: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { name, value }
}

fn parse_value<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(name, value))
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    value.map_or(Ok(default), |value| parse_value(name, value))
}

fn parse_flag(
    name: &'static str,
    value: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, value)),
    }
}
