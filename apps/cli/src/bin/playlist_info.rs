use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use tubeinfo_cli::{
    CommonArgs, create_spinner, empty_listing_exit_code, init_tracing, parse_args, save_json,
};
use tubeinfo_core::{Fetcher, TableStyle, format_markdown_table, format_video_table};

#[derive(Parser)]
#[command(name = "playlist-info", version)]
#[command(about = "List a YouTube playlist with durations as console and Markdown tables")]
struct Cli {
    /// Playlist URL
    url: String,

    /// Also save the playlist entries as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli: Cli = parse_args();
    init_tracing(cli.common.verbose);

    let fetcher = Fetcher::from_config(cli.common.fetch_config());

    let spinner = create_spinner("🔍 Fetching playlist information...");
    let videos = fetcher.list_playlist_entries(&cli.url).await;

    if let Some(code) = empty_listing_exit_code(&videos) {
        spinner.finish_and_clear();
        println!("{} No videos found or error occurred.", style("❌").red());
        std::process::exit(code);
    }

    spinner.finish_with_message(format!(
        "{} Found {} videos",
        style("✓").green().bold(),
        videos.len()
    ));

    println!("\n{}\n", style("📺 YouTube Playlist Videos").bold());
    print!("{}", format_video_table(&videos, TableStyle::Listing));

    println!("\n\n## 📝 Markdown Format for README:\n");
    print!("{}", format_markdown_table(&videos, TableStyle::Listing));
    println!();

    if let Some(path) = &cli.json {
        save_json(&videos, path).await?;
    }

    Ok(())
}
