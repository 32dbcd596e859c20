//! Tubeinfo Core Library
//!
//! Fetches playlist and video metadata through yt-dlp, decodes subtitle
//! transcripts, suggests chapter boundaries and renders console/Markdown tables.

pub mod cache;
pub mod chapters;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod parse;
pub mod runner;
pub mod types;

pub use chapters::{DEFAULT_CHAPTER_COUNT, extract_description_chapters, suggest_chapters};
pub use config::FetchConfig;
pub use error::{Result, TubeinfoError};
pub use fetch::Fetcher;
pub use format::{
    TableStyle, format_chapter_template, format_duration, format_existing_chapters,
    format_markdown_table, format_suggestion_table, format_timestamp, format_total_duration,
    format_video_table, total_duration_seconds, truncate_title,
};
pub use runner::{ToolOutput, ToolRunner, YtDlp};
pub use types::{ChapterSuggestion, ExistingChapter, Transcript, TranscriptSegment, VideoRecord};
