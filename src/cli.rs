//! CLI for the preview pipeline.
use crate::tools::extract::extract_card_from_str;
use crate::tools::fetch::{build_client, ClientConfig};
use crate::tools::select::{select_last_url, select_urls};
use crate::{fetch_preview, IdGenerator, UuidV7Ids};
use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "linkcard",
    version,
    about = "Build a preview card for the last link in some text (JSON only)"
)]
pub struct Cli {
    /// Text to scan for links. Read from stdin when omitted.
    text: Vec<String>,

    /// JSON file with client settings (timeout_ms, redirect_limit, user_agent)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Request timeout in milliseconds, overrides the config file
    #[arg(long = "timeout-ms")]
    timeout_ms: Option<u64>,

    /// Only list the links found, do not fetch anything
    #[arg(long)]
    all: bool,

    /// Extract from a local HTML file instead of fetching the link
    #[arg(long)]
    html: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

// Exposed for delegation and tests
pub fn run_with(cli: Cli) -> Result<()> {
    let text = if cli.text.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read text from stdin")?;
        buf
    } else {
        cli.text.join(" ")
    };

    if cli.all {
        return print_json(&select_urls(&text));
    }

    if let Some(path) = &cli.html {
        let Some(link) = select_last_url(&text) else {
            return print_json(&serde_json::Value::Null);
        };
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let card = extract_card_from_str(&html, link, UuidV7Ids.id_from_time(Utc::now()));
        return print_json(&card);
    }

    let mut cfg = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    if let Some(ms) = cli.timeout_ms {
        cfg = cfg.with_timeout_ms(ms);
    }
    if cfg.timeout_ms == 0 {
        bail!("timeout_ms must be greater than zero");
    }

    let client = build_client(&cfg)?;
    let card = fetch_preview(&client, &text, Utc::now())?;
    print_json(&card)
}

fn load_config(path: &Path) -> Result<ClientConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config json in {}", path.display()))
}

fn print_json<T: serde::Serialize + ?Sized>(val: &T) -> Result<()> {
    // pretty JSON output
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}
