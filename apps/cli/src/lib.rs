//! Shared plumbing for the tubeinfo binaries

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Result;
use clap::{Args, Parser};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tokio::fs;
use tracing_subscriber::EnvFilter;
use tubeinfo_core::FetchConfig;

/// Options every binary accepts
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// yt-dlp binary to run. Defaults to $TUBEINFO_YTDLP, then "yt-dlp".
    #[arg(long, value_name = "PATH")]
    pub ytdlp: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig::from_env();
        if let Some(bin) = &self.ytdlp {
            config.ytdlp_bin = bin.clone();
        }
        config
    }
}

/// Process status for usage errors and empty results
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Crate targets raised to debug by `-v`; everything else stays at warn
const VERBOSE_FILTER: &str = "warn,tubeinfo_core=debug,tubeinfo_cli=debug,\
playlist_info=debug,playlist_full=debug,generate_chapters=debug";

/// Exit status for a failed parse: `--help` and `--version` exit 0, usage
/// errors exit 1 instead of clap's 2.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { FAILURE_EXIT_CODE } else { 0 }
}

/// A listing with no entries ends the process with status 1
pub fn empty_listing_exit_code<T>(items: &[T]) -> Option<i32> {
    items.is_empty().then_some(FAILURE_EXIT_CODE)
}

pub fn parse_args<C: Parser>() -> C {
    match C::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_error_exit_code(&e));
        }
    }
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { "warn" }
}

/// Log to stderr; `RUST_LOG` overrides the default level
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Counter bar for sequential per-item work
pub fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(bar_style) =
        ProgressStyle::default_bar().template("  [{pos}/{len}] {msg} {bar:30.cyan/blue}")
    {
        pb.set_style(bar_style);
    }
    pb
}

pub fn print_banner(subtitle: &str) {
    println!(
        "\n{}  {}\n",
        style("tubeinfo").cyan().bold(),
        style(subtitle).dim()
    );
}

pub fn print_rule(width: usize) {
    println!("{}", style("=".repeat(width)).dim());
}

/// Save records as pretty JSON
pub async fn save_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(value)?;
    fs::write(path, &pretty_json).await?;
    println!(
        "\n{} {}",
        style("Saved:").dim(),
        style(path.display()).cyan()
    );
    Ok(())
}
