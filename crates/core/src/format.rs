use crate::types::{ChapterSuggestion, ExistingChapter, VideoRecord};

const ELLIPSIS: &str = "...";

/// Format seconds as M:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a video duration as M:SS, or N/A when unknown
pub fn format_duration(seconds: Option<u64>) -> String {
    match seconds {
        Some(secs) if secs > 0 => format!("{}:{:02}", secs / 60, secs % 60),
        _ => "N/A".to_string(),
    }
}

/// Format a count with thousands separators
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Shorten a title to `width` characters, ending with an ellipsis when cut
pub fn truncate_title(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        return title.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut out: String = title.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Sum of known durations, in seconds
pub fn total_duration_seconds(videos: &[VideoRecord]) -> u64 {
    videos.iter().map(VideoRecord::duration_or_zero).sum()
}

/// Format a total as "{h}h {m}m"
pub fn format_total_duration(total_seconds: u64) -> String {
    let total_minutes = total_seconds / 60;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

/// Console table layouts for playlist listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Flat playlist listing: index, duration, title
    Listing,
    /// Full metadata: index, duration, views, title
    Detailed,
}

impl TableStyle {
    pub fn title_width(self) -> usize {
        match self {
            TableStyle::Listing => 80,
            TableStyle::Detailed => 60,
        }
    }

    pub fn rule_width(self) -> usize {
        match self {
            TableStyle::Listing => 95,
            TableStyle::Detailed => 90,
        }
    }
}

/// Render the console table with its totals footer
pub fn format_video_table(videos: &[VideoRecord], style: TableStyle) -> String {
    let mut output = String::new();
    let rule = "=".repeat(style.rule_width());

    match style {
        TableStyle::Listing => {
            output.push_str(&format!(
                "{:<4} {:<10} {:<width$}\n",
                "#",
                "Duration",
                "Title",
                width = style.title_width()
            ));
        }
        TableStyle::Detailed => {
            output.push_str(&format!(
                "{:<4} {:<10} {:<12} {:<width$}\n",
                "#",
                "Duration",
                "Views",
                "Title",
                width = style.title_width()
            ));
        }
    }
    output.push_str(&rule);
    output.push('\n');

    for (idx, video) in videos.iter().enumerate() {
        let duration = format_duration(video.duration_seconds);
        let title = truncate_title(&video.title, style.title_width());
        match style {
            TableStyle::Listing => {
                output.push_str(&format!("{:<4} {:<10} {}\n", idx + 1, duration, title));
            }
            TableStyle::Detailed => {
                let views = match video.view_count {
                    Some(count) if count > 0 => format_count(count),
                    _ => "N/A".to_string(),
                };
                output.push_str(&format!(
                    "{:<4} {:<10} {:<12} {}\n",
                    idx + 1,
                    duration,
                    views,
                    title
                ));
            }
        }
    }

    output.push('\n');
    output.push_str(&rule);
    output.push_str("\n\n");

    let total = total_duration_seconds(videos);
    output.push_str(&format!("📊 Total Videos: {}\n", videos.len()));
    match style {
        TableStyle::Listing => {
            output.push_str(&format!(
                "⏱️  Total Duration: {}\n",
                format_total_duration(total)
            ));
        }
        TableStyle::Detailed => {
            output.push_str(&format!(
                "⏱️  Total Duration: {} ({} seconds)\n",
                format_total_duration(total),
                total
            ));
        }
    }

    output
}

/// Short topic for the Markdown table: title up to the first `|`, and for
/// detailed listings without a leading "#1 [tag]" chapter prefix
pub fn markdown_topic(title: &str, style: TableStyle) -> String {
    let topic = match title.split_once('|') {
        Some((head, _)) => head.trim(),
        None => title,
    };
    match (style, topic.split_once(']')) {
        (TableStyle::Detailed, Some((_, rest))) => rest.trim().to_string(),
        _ => topic.to_string(),
    }
}

/// Render the Markdown table intended for a README
pub fn format_markdown_table(videos: &[VideoRecord], style: TableStyle) -> String {
    let mut output = String::new();
    output.push_str("| Chapter | Topic | Duration |\n");
    output.push_str("|---------|-------|----------|\n");

    for (idx, video) in videos.iter().enumerate() {
        output.push_str(&format!(
            "| **{:02}** | {} | ⏱️ ~{} min |\n",
            idx + 1,
            markdown_topic(&video.title, style),
            video.duration_or_zero() / 60
        ));
    }

    output
}

/// Render existing description chapters, one per line
pub fn format_existing_chapters(chapters: &[ExistingChapter]) -> String {
    chapters
        .iter()
        .map(|chapter| format!("  {} - {}", chapter.timestamp, chapter.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render suggestions as a "Timestamp | Nearby Content" table
pub fn format_suggestion_table(suggestions: &[ChapterSuggestion]) -> String {
    let mut output = String::new();
    output.push_str("Timestamp | Nearby Content\n");
    output.push_str(&"-".repeat(70));
    output.push('\n');
    for suggestion in suggestions {
        output.push_str(&format!(
            "{:<10} | {}\n",
            suggestion.timestamp, suggestion.text_hint
        ));
    }
    output
}

/// Description template to paste chapter titles into
pub fn format_chapter_template(suggestions: &[ChapterSuggestion]) -> String {
    suggestions
        .iter()
        .map(|suggestion| format!("  {} [Your Chapter Title Here]", suggestion.timestamp))
        .collect::<Vec<_>>()
        .join("\n")
}
