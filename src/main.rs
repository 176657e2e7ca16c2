use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use seolens_core::{FetchConfig, SeoReport, analyze_html, fetch_html, validate_url};

mod cli;
mod render;

use cli::{Args, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let failures = if let Some(path) = args.file.as_deref() {
        match analyze_file(&args, path) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("Error: {err:#}");
                1
            }
        }
    } else {
        analyze_urls(&args).await
    };

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Analyse every URL independently; returns how many failed
async fn analyze_urls(args: &Args) -> usize {
    let config = args.fetch_config();
    let mut failures = 0;

    for input in &args.urls {
        if let Err(err) = analyze_url(args, &config, input).await {
            eprintln!("Error: {err:#}");
            failures += 1;
        }
    }

    failures
}

async fn analyze_url(args: &Args, config: &FetchConfig, input: &str) -> Result<()> {
    let url = validate_url(input)?;
    info!("analysing {url}");

    let html = fetch_html(&url, config).await?;
    debug!("fetched {} bytes", html.len());

    let report = analyze_html(&html, args.keyword.as_deref());
    emit(args, url.as_str(), &report)
}

fn analyze_file(args: &Args, path: &Path) -> Result<()> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read HTML file {}", path.display()))?;

    let report = analyze_html(&html, args.keyword.as_deref());
    emit(args, &path.display().to_string(), &report)
}

fn emit(args: &Args, source: &str, report: &SeoReport) -> Result<()> {
    let format = args.format();
    let rendered = match format {
        OutputFormat::Text => render::render_text(source, report),
        OutputFormat::Json => {
            render::render_json(source, report).context("failed to serialize report")?
        }
    };

    print!("{rendered}");
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
