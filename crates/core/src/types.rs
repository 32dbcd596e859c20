use serde::{Deserialize, Serialize};

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Build the canonical watch URL for a video id
pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_URL_PREFIX, video_id)
}

/// Metadata for one video, either from a flat playlist listing or a full dump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub video_id: String,
    pub duration_seconds: Option<u64>,
    pub upload_date: Option<String>,
    pub view_count: Option<u64>,
}

impl VideoRecord {
    pub fn url(&self) -> String {
        watch_url(&self.video_id)
    }

    /// Duration with absent treated as zero, for totals
    pub fn duration_or_zero(&self) -> u64 {
        self.duration_seconds.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub text: String,
}

/// Decoded subtitle track for one video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,
    pub language: String,
    pub segments: Vec<TranscriptSegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterSuggestion {
    pub timestamp: String,
    pub time_seconds: f64,
    pub text_hint: String,
}

/// Chapter marker already present in a video description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExistingChapter {
    pub timestamp: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_url_and_zero_duration() {
        let record = VideoRecord {
            title: "Intro".to_string(),
            video_id: "abc123".to_string(),
            duration_seconds: None,
            upload_date: None,
            view_count: None,
        };

        assert_eq!(record.url(), "https://www.youtube.com/watch?v=abc123");
        assert_eq!(record.duration_or_zero(), 0);
    }
}
