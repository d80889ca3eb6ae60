//! Server configuration: Leptos options from the workspace manifest plus
//! environment overrides.

use std::net::SocketAddr;
use std::path::PathBuf;

use leptos::config::{LeptosOptions, get_configuration};

use crate::error::ServerError;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Screenshot directory used when `ASSETS_DIR` is unset.
pub const DEFAULT_ASSETS_DIR: &str = "public/assets";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos: LeptosOptions,
    pub addr: SocketAddr,
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Load from `[[workspace.metadata.leptos]]` and the environment.
    ///
    /// Optional:
    /// - `PORT`: listen on `0.0.0.0:PORT` instead of the manifest `site-addr`
    /// - `ASSETS_DIR`: directory served at `/assets` (default `public/assets`)
    ///
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration cannot be loaded or
    /// `PORT` is not a valid port number.
    pub fn load() -> Result<Self, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
        let leptos = conf.leptos_options;
        let addr = resolve_addr(leptos.site_addr, std::env::var("PORT").ok().as_deref())?;
        let assets_dir = resolve_assets_dir(std::env::var("ASSETS_DIR").ok().as_deref());
        Ok(Self { leptos, addr, assets_dir })
    }
}

/// Listen address: the manifest address unless `port` overrides it.
///
/// # Errors
///
/// Returns `InvalidPort` when `port` is set but not a `u16`.
pub fn resolve_addr(site_addr: SocketAddr, port: Option<&str>) -> Result<SocketAddr, ServerError> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(site_addr);
    };
    let port: u16 = raw.parse().map_err(|_| ServerError::InvalidPort(raw.to_owned()))?;
    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}

pub fn resolve_assets_dir(raw: Option<&str>) -> PathBuf {
    raw.map(str::trim)
        .filter(|dir| !dir.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from)
}
