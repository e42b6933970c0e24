use std::env;
use std::net::SocketAddr;

use eyre::{bail, WrapErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    S3,
    Memory,
}

/// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `REUMACAL_STORE`: `s3` or `memory` (default).
    pub store: StoreKind,
    /// `REUMACAL_BUCKET`, default `reumacal`.
    pub bucket: String,
    /// `REUMACAL_LISTEN_ADDR`. When unset the service runs under Lambda.
    pub listen_addr: Option<SocketAddr>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let store = match lookup("REUMACAL_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("memory") => StoreKind::Memory,
            Some("s3") => StoreKind::S3,
            Some(other) => bail!("REUMACAL_STORE must be `s3` or `memory`, got `{other}`"),
        };

        let bucket = lookup("REUMACAL_BUCKET")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| "reumacal".to_string());

        let listen_addr = match lookup("REUMACAL_LISTEN_ADDR").filter(|a| !a.trim().is_empty()) {
            Some(addr) => Some(
                addr.trim()
                    .parse()
                    .wrap_err_with(|| format!("invalid REUMACAL_LISTEN_ADDR `{addr}`"))?,
            ),
            None => None,
        };

        Ok(Self {
            store,
            bucket,
            listen_addr,
        })
    }
}
