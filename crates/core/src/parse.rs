//! Parsers for yt-dlp output
//!
//! yt-dlp is driven in three output modes:
//! - `--print` templates, one line per playlist entry
//! - `--dump-json`, one JSON object per video
//! - `json3` subtitle files written next to the output template

use serde::Deserialize;

use crate::{
    error::Result,
    types::{TranscriptSegment, VideoRecord},
};

/// Field separator of the flat playlist `--print` template
pub const FLAT_FIELD_SEPARATOR: char = '|';

/// `--print` template for [`parse_flat_playlist`]
pub const FLAT_PLAYLIST_TEMPLATE: &str = "%(title)s|%(id)s|%(duration)s|%(url)s";

/// Parse `--print %(id)s` output into video ids, skipping blank lines
pub fn parse_video_ids(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse flat playlist output produced with [`FLAT_PLAYLIST_TEMPLATE`]
pub fn parse_flat_playlist(stdout: &str) -> Vec<VideoRecord> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let record = parse_flat_playlist_line(line);
            if record.is_none() {
                tracing::debug!(line, "skipping malformed playlist line");
            }
            record
        })
        .collect()
}

fn parse_flat_playlist_line(line: &str) -> Option<VideoRecord> {
    // Split from the right so titles containing the separator stay whole
    let mut fields = line.rsplitn(4, FLAT_FIELD_SEPARATOR);
    let _url = fields.next()?;
    let duration = fields.next()?;
    let video_id = fields.next()?.trim();
    let title = fields.next()?;

    if video_id.is_empty() {
        return None;
    }

    Some(VideoRecord {
        title: title.to_string(),
        video_id: video_id.to_string(),
        duration_seconds: parse_duration_field(duration),
        upload_date: None,
        view_count: None,
    })
}

/// yt-dlp prints `NA` for unknown fields; durations may be fractional
pub fn parse_duration_field(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "NA" {
        return None;
    }
    if let Ok(secs) = raw.parse::<u64>() {
        return Some(secs);
    }
    raw.parse::<f64>().ok().and_then(seconds_from_float)
}

fn seconds_from_float(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.trunc() as u64)
}

#[derive(Debug, Deserialize)]
struct YtDlpVideoInfo {
    id: Option<String>,
    title: Option<String>,
    duration: Option<f64>,
    view_count: Option<u64>,
    upload_date: Option<String>,
}

/// Parse one `--dump-json` document
pub fn parse_video_info(json: &str) -> Result<VideoRecord> {
    let info: YtDlpVideoInfo = serde_json::from_str(json)?;

    Ok(VideoRecord {
        title: info.title.unwrap_or_else(|| "Unknown".to_string()),
        video_id: info.id.unwrap_or_default(),
        duration_seconds: info.duration.and_then(seconds_from_float),
        upload_date: info.upload_date,
        view_count: info.view_count,
    })
}

#[derive(Debug, Deserialize)]
struct Json3Document {
    events: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs")]
    t_start_ms: Option<f64>,
    segs: Option<Vec<Json3Seg>>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    utf8: Option<String>,
}

/// Parse a json3 subtitle document into time-ordered transcript segments.
///
/// Each event is decoded on its own so one malformed event does not discard
/// the track. Events without text are dropped.
pub fn parse_json3(content: &str) -> serde_json::Result<Vec<TranscriptSegment>> {
    let document: Json3Document = serde_json::from_str(content)?;

    let mut segments: Vec<TranscriptSegment> = document
        .events
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match serde_json::from_value::<Json3Event>(raw) {
            Ok(event) => segment_from_event(event),
            Err(e) => {
                tracing::debug!(index, error = %e, "skipping malformed subtitle event");
                None
            }
        })
        .collect();

    segments.sort_by(|a, b| a.start.total_cmp(&b.start));
    Ok(segments)
}

fn segment_from_event(event: Json3Event) -> Option<TranscriptSegment> {
    let segs = event.segs?;
    let text: String = segs.into_iter().filter_map(|seg| seg.utf8).collect();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let start = event.t_start_ms.unwrap_or(0.0).max(0.0) / 1000.0;
    Some(TranscriptSegment {
        start,
        text: text.to_string(),
    })
}
