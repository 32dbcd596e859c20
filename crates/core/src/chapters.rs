//! Chapter discovery
//!
//! Two sources are supported:
//! - chapter lines already present in a video description (`0:00 Intro`)
//! - evenly spaced suggestions cut from a subtitle transcript

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    format::format_timestamp,
    types::{ChapterSuggestion, ExistingChapter, TranscriptSegment},
};

pub const DEFAULT_CHAPTER_COUNT: usize = 5;

/// Number of leading words kept in a suggestion hint
pub const HINT_WORDS: usize = 8;

/// Matches "0:00 Intro", "12:34 Setup", "1:02:03 Long part" and "[0:00] Intro"
static CHAPTER_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\[?(\d{1,2}:\d{2}(?::\d{2})?)\]?\s+(.+?)\s*$").expect("valid chapter regex")
});

/// Extract chapter lines from a video description, in order of appearance
pub fn extract_description_chapters(description: Option<&str>) -> Vec<ExistingChapter> {
    let Some(description) = description else {
        return Vec::new();
    };

    description
        .lines()
        .filter_map(|line| {
            let caps = CHAPTER_LINE_REGEX.captures(line)?;
            Some(ExistingChapter {
                timestamp: caps.get(1)?.as_str().to_string(),
                title: caps.get(2)?.as_str().to_string(),
            })
        })
        .collect()
}

/// Suggest up to `num_chapters` chapter starts spread evenly over the transcript.
///
/// Segments are split into `num_chapters` contiguous buckets by index and each
/// bucket start becomes a suggestion. With fewer segments than buckets the step
/// is clamped to one, so every segment is used.
pub fn suggest_chapters(
    segments: &[TranscriptSegment],
    num_chapters: usize,
) -> Vec<ChapterSuggestion> {
    if segments.is_empty() || num_chapters == 0 {
        return Vec::new();
    }

    let bucket_size = (segments.len() / num_chapters).max(1);

    segments
        .iter()
        .step_by(bucket_size)
        .take(num_chapters)
        .map(|segment| ChapterSuggestion {
            timestamp: format_timestamp(segment.start),
            time_seconds: segment.start,
            text_hint: text_hint(&segment.text),
        })
        .collect()
}

fn text_hint(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().take(HINT_WORDS).collect();
    format!("{}...", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(count: usize) -> Vec<TranscriptSegment> {
        (0..count)
            .map(|i| TranscriptSegment {
                start: i as f64 * 10.0,
                text: format!("segment number {i}"),
            })
            .collect()
    }

    #[test]
    fn test_description_chapters_basic() {
        let chapters = extract_description_chapters(Some("0:00 Intro\n1:30 Setup"));

        assert_eq!(
            chapters,
            vec![
                ExistingChapter {
                    timestamp: "0:00".to_string(),
                    title: "Intro".to_string()
                },
                ExistingChapter {
                    timestamp: "1:30".to_string(),
                    title: "Setup".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_description_chapters_brackets_and_hours() {
        let desc = "Welcome to the course!\n[00:00] Start here  \n  12:05 Middle\n1:02:03 Deep dive\nvisit 3:00pm";
        let chapters = extract_description_chapters(Some(desc));

        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].timestamp, "00:00");
        assert_eq!(chapters[0].title, "Start here");
        assert_eq!(chapters[1].timestamp, "12:05");
        assert_eq!(chapters[2].timestamp, "1:02:03");
        assert_eq!(chapters[2].title, "Deep dive");
    }

    #[test]
    fn test_description_chapters_empty() {
        assert!(extract_description_chapters(None).is_empty());
        assert!(extract_description_chapters(Some("")).is_empty());
        assert!(extract_description_chapters(Some("No timestamps here.")).is_empty());
    }

    #[test]
    fn test_suggest_chapters_empty() {
        assert!(suggest_chapters(&[], 5).is_empty());
        assert!(suggest_chapters(&segments(10), 0).is_empty());
    }

    #[test]
    fn test_suggest_chapters_even_split() {
        let suggestions = suggest_chapters(&segments(10), 5);
        let times: Vec<f64> = suggestions.iter().map(|s| s.time_seconds).collect();

        assert_eq!(times, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
        assert_eq!(suggestions[1].timestamp, "0:20");
        assert_eq!(suggestions[1].text_hint, "segment number 2...");
    }

    #[test]
    fn test_suggest_chapters_never_exceeds_requested_count() {
        for len in 1..60 {
            for n in 1..=len.min(12) {
                let suggestions = suggest_chapters(&segments(len), n);
                assert!(suggestions.len() <= n, "len={len} n={n}");
                assert!(!suggestions.is_empty());
                assert!(
                    suggestions
                        .windows(2)
                        .all(|w| w[0].time_seconds < w[1].time_seconds)
                );
            }
        }
    }

    #[test]
    fn test_suggest_chapters_fewer_segments_than_buckets() {
        let suggestions = suggest_chapters(&segments(3), 5);
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn test_text_hint_truncates_to_eight_words() {
        let hint = text_hint("one two  three four five six seven eight nine ten");
        assert_eq!(hint, "one two three four five six seven eight...");
        assert_eq!(text_hint("short"), "short...");
    }
}
