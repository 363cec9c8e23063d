//! The unlock flow.
//!
//! Validate the options, load the certificate, prompt for both secrets,
//! and issue the single `walletpassphrase` call. Every failure ends the
//! run; nothing is retried.

use tracing::debug;

use crate::cert;
use crate::config::Config;
use crate::error::Result;
use crate::prompt::{SecretPrompt, TerminalPrompt};
use crate::rpc::{RpcClient, WalletRpc};
use crate::secmem::Secret;

/// Run the unlock flow against the controlling terminal and the configured
/// RPC server. Returns the number of seconds the wallet is unlocked for.
pub async fn run(config: &Config) -> Result<i64> {
    run_with(config, &mut TerminalPrompt, RpcClient::connect).await
}

/// Unlock flow with the terminal and RPC seams injected.
///
/// `connect` is only reached once validation has passed and the
/// certificate has been read; the wallet passphrase is only prompted once
/// a client session exists. Both secrets are dropped (and their memory
/// cleared) as soon as the call returns.
pub async fn run_with<P, C, F>(config: &Config, prompt: &mut P, connect: F) -> Result<i64>
where
    P: SecretPrompt,
    C: WalletRpc,
    F: FnOnce(&Config, Secret, &[u8]) -> Result<C>,
{
    config.validate()?;

    let cert_pem = cert::read_certificate(&config.cert_path)?;

    let rpc_pass = prompt.secret("RPC password")?;
    let client = connect(config, rpc_pass, &cert_pem)?;

    let passphrase = prompt.secret("Wallet passphrase")?;
    debug!(
        "requesting wallet unlock for {} seconds",
        config.unlock_seconds
    );
    client
        .unlock(passphrase.as_str(), config.unlock_seconds)
        .await?;

    Ok(config.unlock_seconds)
}
