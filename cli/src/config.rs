//! Command-line and environment configuration.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Base URL baked in at build time through `POSTS_API_URL`, if it was set.
pub const DEFAULT_BASE_URL: &str = match option_env!("POSTS_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:3000/api",
};

#[derive(Debug, Clone, Parser)]
#[command(name = "posts")]
#[command(about = "Interactive client for a posts CRUD service", long_about = None)]
#[command(version)]
pub struct Config {
    /// Origin of the posts API; requests go to `<base-url>/posts`.
    #[arg(long, env = "POSTS_API_URL", default_value = DEFAULT_BASE_URL, value_parser = parse_base_url)]
    pub base_url: String,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn")]
    pub log_level: String,
}

impl Config {
    /// Logs go to stderr so they never interleave with the rendered view.
    /// `RUST_LOG` wins over `--log-level` when set.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("posts_core={0},posts_cli={0}", self.log_level)));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

fn parse_base_url(raw: &str) -> Result<String, String> {
    let url = raw.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(format!("expected an http:// or https:// URL, got `{raw}`"))
    }
}
