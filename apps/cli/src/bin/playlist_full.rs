use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use tubeinfo_cli::{
    CommonArgs, create_progress_bar, create_spinner, empty_listing_exit_code, init_tracing,
    parse_args, print_banner, save_json,
};
use tubeinfo_core::{Fetcher, TableStyle, format_markdown_table, format_video_table};

#[derive(Parser)]
#[command(name = "playlist-full", version)]
#[command(about = "Fetch full metadata for every video of a YouTube playlist")]
struct Cli {
    /// Playlist URL
    url: String,

    /// Also save the fetched video records as JSON
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

    print_banner("Playlist Details");

    let spinner = create_spinner("🔍 Fetching playlist video list...");
    let video_urls = fetcher.list_playlist_video_urls(&cli.url).await;

    if let Some(code) = empty_listing_exit_code(&video_urls) {
        spinner.finish_and_clear();
        println!("{} No videos found in playlist", style("❌").red());
        std::process::exit(code);
    }

    spinner.finish_with_message(format!(
        "📹 Found {} videos. Fetching details...",
        video_urls.len()
    ));

    // One yt-dlp process per video, strictly in playlist order
    let progress = create_progress_bar(video_urls.len() as u64);
    progress.set_message("Fetching metadata...");
    let mut videos = Vec::with_capacity(video_urls.len());
    for url in &video_urls {
        if let Some(video) = fetcher.fetch_full_metadata(url).await {
            videos.push(video);
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if videos.len() < video_urls.len() {
        tracing::warn!(
            failed = video_urls.len() - videos.len(),
            total = video_urls.len(),
            "some videos could not be fetched"
        );
    }

    println!("\n{}\n", style("📺 YouTube Playlist Videos").bold());
    print!("{}", format_video_table(&videos, TableStyle::Detailed));

    println!("\n\n## 📝 Markdown Format for README:\n");
    print!("{}", format_markdown_table(&videos, TableStyle::Detailed));
    println!();

    if let Some(path) = &cli.json {
        save_json(&videos, path).await?;
    }

    Ok(())
}
