use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use tubeinfo_cli::{CommonArgs, create_spinner, init_tracing, parse_args, print_banner, print_rule};
use tubeinfo_core::{
    DEFAULT_CHAPTER_COUNT, Fetcher, extract_description_chapters, format_chapter_template,
    format_existing_chapters, format_suggestion_table, suggest_chapters,
};

#[derive(Parser)]
#[command(name = "generate-chapters", version)]
#[command(about = "Show a video's chapters, or suggest chapter timestamps from its transcript")]
struct Cli {
    /// Video URL
    url: String,

    /// Number of chapters to suggest
    #[arg(short = 'n', long, default_value_t = DEFAULT_CHAPTER_COUNT as u32)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    chapters: u32,

    /// Directory for downloaded subtitle files
    #[arg(long, value_name = "DIR")]
    subtitle_dir: Option<PathBuf>,

    /// Download subtitles again even if they are already on disk
    #[arg(short, long)]
    force: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn print_no_transcript_help() {
    println!("{} No transcript available for this video.", style("❌").red());
    println!("\n💡 Suggestions:");
    println!("  1. Enable auto-generated subtitles on YouTube");
    println!("  2. Manually watch the video and note major topic changes");
    println!("  3. Use the video's natural sections (intro, main content, outro)");
}

fn print_how_to() {
    println!("\n💡 How to create chapters:");
    println!("  1. Review the timestamps and nearby content above");
    println!("  2. Watch those sections of the video");
    println!("  3. Create descriptive chapter titles");
    println!("  4. Add to video description in format: 0:00 Chapter Title");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli: Cli = parse_args();
    init_tracing(cli.common.verbose);

    let mut config = cli.common.fetch_config();
    if let Some(dir) = cli.subtitle_dir {
        config.subtitle_dir = dir;
    }
    config.reuse_subtitles = !cli.force;
    let fetcher = Fetcher::from_config(config);

    print_banner("📹 YouTube Chapter Generator");

    let title = fetcher.fetch_title(&cli.url).await;
    println!("Video: {}\n", style(&title).bold());

    let spinner = create_spinner("🔍 Checking for existing chapters in description...");
    let description = fetcher.fetch_description(&cli.url).await;
    let existing = extract_description_chapters(description.as_deref());
    spinner.finish_and_clear();

    if !existing.is_empty() {
        println!(
            "{} Found {} existing chapters:\n",
            style("✅").green(),
            existing.len()
        );
        println!("{}", format_existing_chapters(&existing));
        println!();
        print_rule(70);
        return Ok(());
    }

    println!("{} No chapters found in description.\n", style("❌").red());

    let spinner = create_spinner("🔍 Downloading transcript...");
    let transcript = fetcher.fetch_transcript(&cli.url).await;
    spinner.finish_and_clear();

    let Some(transcript) = transcript else {
        print_no_transcript_help();
        return Ok(());
    };

    println!(
        "{} Transcript downloaded! {}\n",
        style("✅").green(),
        style(format!(
            "({}, {} segments)",
            transcript.language,
            transcript.segments.len()
        ))
        .dim()
    );

    println!("🤖 Analyzing transcript for chapter suggestions...\n");
    let suggestions = suggest_chapters(&transcript.segments, cli.chapters as usize);

    if suggestions.is_empty() {
        println!(
            "{} Could not generate chapter suggestions from transcript.",
            style("❌").red()
        );
        return Ok(());
    }

    println!("📝 Suggested Chapter Points (based on transcript segments):\n");
    print!("{}", format_suggestion_table(&suggestions));
    println!();
    print_rule(70);
    print_how_to();
    println!("\n📋 Template:");
    println!("{}", format_chapter_template(&suggestions));

    Ok(())
}
