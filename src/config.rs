//! Resolved CLI options and startup validation.
//!
//! All four options are collected once into an immutable [`Config`] and
//! passed by reference through the rest of the flow. Validation happens
//! before any secret is prompted or any network work starts.

use std::path::PathBuf;

use crate::cert;
use crate::error::{Error, Result};

/// Default wallet RPC server address
pub const DEFAULT_SERVER_ADDR: &str = "localhost:8332";

/// Default unlock duration in seconds
pub const DEFAULT_UNLOCK_SECONDS: i64 = 60;

/// Longest unlock duration the tool will request
pub const MAX_UNLOCK_SECONDS: i64 = 60 * 60;

/// Options for a single unlock run
#[derive(Debug, Clone)]
pub struct Config {
    /// Network address (host:port) of the wallet RPC server
    pub server_addr: String,

    /// RPC username
    pub rpc_user: String,

    /// Path to the TLS certificate for the RPC server
    pub cert_path: PathBuf,

    /// Seconds to keep the wallet unlocked
    pub unlock_seconds: i64,
}

impl Config {
    /// Check the resolved options before doing any work with them.
    ///
    /// Checks run in order and the first failure wins. The certificate
    /// check is a stat only; a stat failure other than not-found
    /// propagates with its cause.
    pub fn validate(&self) -> Result<()> {
        if self.rpc_user.is_empty() {
            return Err(Error::NoRpcUser);
        }
        if self.unlock_seconds < 0 {
            return Err(Error::NegativeSeconds);
        }
        if self.unlock_seconds > MAX_UNLOCK_SECONDS {
            return Err(Error::SecondsExceedHour);
        }
        if !cert::file_exists(&self.cert_path)? {
            return Err(Error::CertNotFound(self.cert_path.clone()));
        }
        Ok(())
    }
}

/// Default certificate location: the platform application-data directory
/// joined with `walletd/rpc.cert`, falling back to a dot directory under
/// the home directory.
pub fn default_cert_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("walletd"))
        .or_else(|| dirs::home_dir().map(|dir| dir.join(".walletd")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rpc.cert")
}
