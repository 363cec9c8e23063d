//! Error types for the unlock tool

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no RPC username supplied (use -u to set)")]
    NoRpcUser,

    #[error("negative unlock duration (use -s to set)")]
    NegativeSeconds,

    #[error("unlock duration exceeds one hour (use -s to set)")]
    SecondsExceedHour,

    #[error("TLS certificate file `{}` not found (use --cert to set)", .0.display())]
    CertNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
