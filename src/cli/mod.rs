use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::VoteService;
use crate::domain::VotePolicy;
use crate::http;

/// Civicvote - vote ledger for civic issue reports
#[derive(Parser)]
#[command(name = "civicvote")]
#[command(about = "An in-memory vote ledger service for civic issue reports")]
#[command(version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    /// Vote policy: monotonic (every call adds 1) or toggle (voted/unvoted)
    #[arg(long, default_value = "monotonic")]
    pub policy: String,

    /// Reject repeat votes carrying an already-counted voterId
    #[arg(long)]
    pub enforce_unique_voters: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let policy = VotePolicy::from_str(&self.policy).with_context(|| {
            format!(
                "Invalid policy '{}'. Use 'monotonic' or 'toggle'",
                self.policy
            )
        })?;

        let ip: IpAddr = self
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind))?;
        let addr = SocketAddr::new(ip, self.port);

        let service =
            Arc::new(VoteService::new(policy).with_unique_voters(self.enforce_unique_voters));

        tracing::info!(
            %policy,
            enforce_unique_voters = self.enforce_unique_voters,
            "starting vote service (counts reset on restart; there is no persistence)"
        );

        http::serve(service, addr).await
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "civicvote=debug,tower_http=debug"
    } else {
        "civicvote=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
