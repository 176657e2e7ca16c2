use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use seolens_core::FetchConfig;
use seolens_core::fetch::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "seolens")]
#[command(author = "Pon Datalab")]
#[command(version)]
#[command(about = "seolens — an on-page SEO lens for a single web page")]
#[command(after_help = "Developed by Pon Datalab")]
pub struct Args {
    /// Page URLs to analyse (each must start with http:// or https://)
    #[arg(required_unless_present = "file", value_name = "URL")]
    pub urls: Vec<String>,

    /// Target keyword or phrase to check placement and density for
    #[arg(short, long, value_name = "PHRASE")]
    pub keyword: Option<String>,

    /// Analyse a local HTML file instead of fetching a URL
    #[arg(short, long, value_name = "PATH", conflicts_with = "urls")]
    pub file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Fetch timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Maximum number of redirects to follow
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::default()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_max_redirects(self.max_redirects)
    }

    /// Output format chosen on the command line
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
