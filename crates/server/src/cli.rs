use clap::{Args, Parser, Subcommand};
use splitter_core::config::{AppConfig, ConfigError, CONFIG_PATH_ENV};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rpc-splitter")]
#[command(version, about = "JSON-RPC proxy that splits every call across several Ethereum nodes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the splitter HTTP server
    Run(RunArgs),
}

/// Flags of `rpc-splitter run`. Every flag that is given overrides the config file and
/// the environment.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Listen address
    #[arg(short, long, value_name = "ADDR")]
    pub listen: Option<String>,

    /// Enable permissive CORS headers
    #[arg(long)]
    pub enable_cors: bool,

    /// Seconds after which a call may return with the responses collected so far
    #[arg(long, value_name = "SECONDS")]
    pub graceful_timeout: Option<u64>,

    /// Hard limit for one call, in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// How far behind the highest block number a node may be
    #[arg(long, value_name = "BLOCKS")]
    pub max_blocks_behind: Option<u64>,

    /// Upstream Ethereum RPC URL (repeatable)
    #[arg(long = "eth-rpc", value_name = "URL")]
    pub eth_rpc: Vec<String>,

    /// Path to a TOML config file
    #[arg(short, long, env = CONFIG_PATH_ENV, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_parser = ["json", "pretty"])]
    pub log_format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl RunArgs {
    /// Loads the layered configuration and applies these flags on top.
    ///
    /// # Errors
    ///
    /// Returns the configuration loader's error.
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::from_file(self.config.as_ref())?;
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(listen) = &self.listen {
            config.server.listen.clone_from(listen);
        }
        if self.enable_cors {
            config.server.enable_cors = true;
        }
        if let Some(seconds) = self.graceful_timeout {
            config.splitter.graceful_timeout_seconds = seconds;
        }
        if let Some(seconds) = self.timeout {
            config.splitter.total_timeout_seconds = seconds;
        }
        if let Some(blocks) = self.max_blocks_behind {
            config.splitter.max_blocks_behind = blocks;
        }
        if !self.eth_rpc.is_empty() {
            config.splitter.endpoints.clone_from(&self.eth_rpc);
        }
        if let Some(format) = &self.log_format {
            config.logging.format.clone_from(format);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }
}
