//! JSON-RPC client for the wallet service.
//!
//! One HTTPS session in POST mode, authenticated with HTTP basic
//! credentials. The operator-supplied certificate is the sole TLS root of
//! trust; the platform's built-in roots are disabled. The wallet service
//! speaks the JSON-RPC 1.0 envelope.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::secmem::Secret;

/// JSON-RPC request ID counter
static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// JSON-RPC 1.0 request
#[derive(Debug, Serialize)]
struct JsonRpcRequest {
    jsonrpc: &'static str,
    method: &'static str,
    params: Value,
    id: u64,
}

/// JSON-RPC 1.0 response
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcError>,
    #[allow(dead_code)]
    #[serde(default)]
    id: u64,
}

/// JSON-RPC error object
#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

impl JsonRpcResponse {
    /// Server errors pass through with their code and message untouched.
    fn into_result(self) -> Result<Value> {
        if let Some(error) = self.error {
            return Err(Error::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

/// Wallet operations issued over RPC.
///
/// One method, so the whole invoker can be swapped for a test double.
#[async_trait]
pub trait WalletRpc {
    /// Unlock the wallet with `passphrase` for `seconds` seconds.
    async fn unlock(&self, passphrase: &str, seconds: i64) -> Result<()>;
}

/// An authenticated HTTPS session with the wallet RPC server
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    user: String,
    pass: Secret,
}

impl RpcClient {
    /// Build a client session against the configured server.
    ///
    /// `cert_pem` must hold the PEM bytes of the server's certificate; a
    /// server presenting any other chain is rejected at the TLS layer.
    pub fn connect(config: &Config, rpc_pass: Secret, cert_pem: &[u8]) -> Result<Self> {
        let cert = reqwest::Certificate::from_pem(cert_pem)?;
        let http = reqwest::Client::builder()
            .tls_built_in_root_certs(false)
            .add_root_certificate(cert)
            .build()?;

        Ok(Self {
            http,
            url: format!("https://{}/", config.server_addr),
            user: config.rpc_user.clone(),
            pass: rpc_pass,
        })
    }

    async fn call(&self, method: &'static str, params: Value) -> Result<Value> {
        let id = REQUEST_ID.fetch_add(1, Ordering::SeqCst);
        let request = JsonRpcRequest {
            jsonrpc: "1.0",
            method,
            params,
            id,
        };

        debug!("sending {} request to {}", method, self.url);

        let response = self
            .http
            .post(&self.url)
            .basic_auth(&self.user, Some(self.pass.as_str()))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::BadStatus(response.status()));
        }

        let body: JsonRpcResponse = response.json().await?;
        body.into_result()
    }
}

#[async_trait]
impl WalletRpc for RpcClient {
    async fn unlock(&self, passphrase: &str, seconds: i64) -> Result<()> {
        // walletpassphrase returns null on success; only the error branch
        // carries information.
        self.call("walletpassphrase", json!([passphrase, seconds]))
            .await?;
        Ok(())
    }
}
