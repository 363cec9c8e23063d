//! Wallet Unlock
//!
//! A thin client that asks a walletd RPC server to unlock its wallet for a
//! bounded number of seconds.
//!
//! ## Security Model
//!
//! - The RPC password and wallet passphrase are prompted with echo
//!   disabled and never written anywhere durable
//! - The server is authenticated by the operator-supplied TLS certificate
//!   only; built-in roots are not consulted
//! - Secrets are locked in memory while held and zeroized on drop

pub mod cert;
pub mod config;
pub mod error;
pub mod prompt;
pub mod rpc;
pub mod secmem;
pub mod unlock;

pub use config::Config;
pub use error::{Error, Result};
pub use prompt::{SecretPrompt, TerminalPrompt};
pub use rpc::{RpcClient, WalletRpc};
pub use secmem::Secret;
