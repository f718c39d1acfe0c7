//! Gateway configuration resolution
//!
//! Each setting resolves through the priority chain:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (folded into the CLI layer by clap)
//! 3. TOML config file
//! 4. Compiled default (fallback)

use std::path::PathBuf;

use clap::Parser;
use tunegate_common::config::{default_config_path, load_optional_config, TomlConfig};

use crate::services::upstream_client::DEFAULT_TIMEOUT_SECS;
use crate::services::UpstreamConfig;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5740";
/// Default upstream catalog API (public JioSaavn API mirror)
pub const DEFAULT_UPSTREAM_URL: &str = "https://jiosaavnapi-nu.vercel.app";

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "tunegate-gw", about = "Music catalog proxy gateway")]
pub struct Cli {
    /// Socket address to listen on
    #[arg(long, env = "TUNEGATE_BIND_ADDR")]
    pub bind_addr: Option<String>,

    /// Base URL of the upstream catalog API
    #[arg(long, env = "TUNEGATE_UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    /// Per-call upstream timeout in seconds
    #[arg(long, env = "TUNEGATE_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,

    /// Path to TOML config file (default: platform config dir)
    #[arg(long, env = "TUNEGATE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Fully-resolved gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address the gateway listens on
    pub bind_addr: String,
    /// Upstream connection settings injected into the client
    pub upstream: UpstreamConfig,
}

impl GatewayConfig {
    /// Resolve configuration from CLI/env, the TOML file, and defaults
    pub fn resolve(cli: &Cli) -> Self {
        let toml_path = cli.config.clone().or_else(default_config_path);
        let file = load_optional_config(toml_path.as_deref());
        Self::from_tiers(cli, &file)
    }

    fn from_tiers(cli: &Cli, file: &TomlConfig) -> Self {
        let bind_addr = cli
            .bind_addr
            .clone()
            .or_else(|| file.bind_addr.clone())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let base_url = cli
            .upstream_url
            .clone()
            .or_else(|| file.upstream_base_url.clone())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());

        let timeout_secs = cli
            .upstream_timeout_secs
            .or(file.upstream_timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            bind_addr,
            upstream: UpstreamConfig::new(base_url).with_timeout_secs(timeout_secs),
        }
    }
}
