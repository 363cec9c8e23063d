//! Wallet Unlock CLI
//!
//! Prompts for the RPC password and wallet passphrase, then unlocks the
//! wallet on a walletd RPC server for a limited time.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallet_unlock::{config, unlock, Config};

#[derive(Parser)]
#[command(name = "wallet-unlock")]
#[command(about = "Temporarily unlock a wallet over the walletd RPC interface")]
#[command(version)]
struct Cli {
    /// Network address (host:port) of the wallet RPC server
    #[arg(
        short = 'c',
        long = "connect",
        value_name = "HOST:PORT",
        default_value = config::DEFAULT_SERVER_ADDR
    )]
    connect: String,

    /// RPC username
    #[arg(short = 'u', long = "rpc-user", value_name = "NAME", default_value = "")]
    rpc_user: String,

    /// Certificate file for RPC TLS
    #[arg(long = "cert", value_name = "FILE")]
    cert: Option<PathBuf>,

    /// Seconds to keep the wallet unlocked
    #[arg(
        short = 's',
        long = "seconds",
        value_name = "N",
        allow_hyphen_values = true,
        default_value_t = config::DEFAULT_UNLOCK_SECONDS
    )]
    seconds: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config {
        server_addr: cli.connect,
        rpc_user: cli.rpc_user,
        cert_path: cli.cert.unwrap_or_else(config::default_cert_path),
        unlock_seconds: cli.seconds,
    };

    match unlock::run(&config).await {
        Ok(seconds) => println!("Wallet unlocked for {} seconds.", seconds),
        Err(err) => {
            println!("{}", err);
            std::process::exit(1);
        }
    }
}
