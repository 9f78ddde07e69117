use std::env::VarError;

use anyhow::anyhow;

pub const DEFAULT_PATH_SERVICE_ADDR: &str = "http://127.0.0.1:3000";

/// Environment variables read by [`Config::env`], all optional.
pub const OPTIONAL_VARIABLES: &[&str] = &["PATH_SERVICE_ADDR"];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub path_service_addr: String,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> anyhow::Result<Self> {
        let path_service_addr =
            env_or(&lookup, "PATH_SERVICE_ADDR", DEFAULT_PATH_SERVICE_ADDR)?;

        Ok(Self { path_service_addr })
    }

    pub fn log(&self) {
        log::info!("path service address: {}", self.path_service_addr);
    }
}

fn env_or(
    lookup: impl Fn(&str) -> Result<String, VarError>,
    name: &str,
    default: &str,
) -> anyhow::Result<String> {
    match lookup(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(default.to_owned()),
        Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
    }
}
