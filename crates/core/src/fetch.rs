//! yt-dlp adapter
//!
//! Every operation comes in two flavours: a `try_*` method returning a typed
//! [`Result`], and a best-effort method that logs the failure and returns an
//! empty or absent value. The binaries use the best-effort ones.

use std::path::Path;

use tokio::fs;

use crate::{
    cache::{find_subtitles_in_cache, get_subtitle_output_template, get_subtitle_path},
    config::FetchConfig,
    error::{Result, TubeinfoError},
    parse::{
        FLAT_PLAYLIST_TEMPLATE, parse_flat_playlist, parse_json3, parse_video_ids,
        parse_video_info,
    },
    runner::{ToolRunner, YtDlp},
    types::{Transcript, TranscriptSegment, VideoRecord, watch_url},
};

pub struct Fetcher<R = YtDlp> {
    runner: R,
    config: FetchConfig,
}

impl Fetcher<YtDlp> {
    /// Fetcher backed by the yt-dlp binary named in `config`
    pub fn from_config(config: FetchConfig) -> Self {
        let runner = YtDlp::new(config.ytdlp_bin.clone());
        Self { runner, config }
    }
}

impl<R: ToolRunner> Fetcher<R> {
    pub fn new(runner: R, config: FetchConfig) -> Self {
        Self { runner, config }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    async fn run_checked(
        &self,
        operation: &'static str,
        url: &str,
        args: Vec<String>,
    ) -> Result<String> {
        let output = self.runner.run(&args).await?;
        if !output.success {
            return Err(TubeinfoError::ToolFailed {
                operation,
                url: url.to_string(),
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output.stdout)
    }

    /// Watch URLs for every entry of a playlist
    pub async fn try_list_playlist_video_urls(&self, playlist_url: &str) -> Result<Vec<String>> {
        let stdout = self
            .run_checked(
                "playlist listing",
                playlist_url,
                args(&["--flat-playlist", "--print", "%(id)s", playlist_url]),
            )
            .await?;

        Ok(parse_video_ids(&stdout)
            .iter()
            .map(|id| watch_url(id))
            .collect())
    }

    pub async fn list_playlist_video_urls(&self, playlist_url: &str) -> Vec<String> {
        match self.try_list_playlist_video_urls(playlist_url).await {
            Ok(urls) => urls,
            Err(e) => {
                tracing::error!(error = %e, "failed to list playlist");
                Vec::new()
            }
        }
    }

    /// Title, id and duration of every playlist entry, from a single flat listing
    pub async fn try_list_playlist_entries(&self, playlist_url: &str) -> Result<Vec<VideoRecord>> {
        let stdout = self
            .run_checked(
                "playlist listing",
                playlist_url,
                args(&["--flat-playlist", "--print", FLAT_PLAYLIST_TEMPLATE, playlist_url]),
            )
            .await?;

        Ok(parse_flat_playlist(&stdout))
    }

    pub async fn list_playlist_entries(&self, playlist_url: &str) -> Vec<VideoRecord> {
        match self.try_list_playlist_entries(playlist_url).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(error = %e, "failed to list playlist");
                Vec::new()
            }
        }
    }

    /// Full metadata for one video via `--dump-json`
    pub async fn try_fetch_full_metadata(&self, video_url: &str) -> Result<VideoRecord> {
        let stdout = self
            .run_checked(
                "metadata dump",
                video_url,
                args(&["--dump-json", "--skip-download", video_url]),
            )
            .await?;

        parse_video_info(&stdout)
    }

    pub async fn fetch_full_metadata(&self, video_url: &str) -> Option<VideoRecord> {
        match self.try_fetch_full_metadata(video_url).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::error!(url = video_url, error = %e, "failed to fetch metadata");
                None
            }
        }
    }

    async fn print_field(&self, video_url: &str, template: &str) -> Result<String> {
        self.run_checked("field print", video_url, args(&["--print", template, video_url]))
            .await
    }

    pub async fn try_fetch_video_id(&self, video_url: &str) -> Result<String> {
        let stdout = self.print_field(video_url, "%(id)s").await?;
        parse_video_ids(&stdout)
            .into_iter()
            .next()
            .ok_or_else(|| TubeinfoError::MissingVideoId {
                url: video_url.to_string(),
            })
    }

    /// Video title, or "Unknown" when it cannot be fetched
    pub async fn fetch_title(&self, video_url: &str) -> String {
        match self.print_field(video_url, "%(title)s").await {
            Ok(stdout) if !stdout.trim().is_empty() => stdout.trim().to_string(),
            Ok(_) => "Unknown".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch title");
                "Unknown".to_string()
            }
        }
    }

    pub async fn fetch_description(&self, video_url: &str) -> Option<String> {
        match self.print_field(video_url, "%(description)s").await {
            Ok(stdout) => Some(stdout),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch description");
                None
            }
        }
    }

    async fn download_subtitles(&self, video_url: &str) -> Result<()> {
        fs::create_dir_all(&self.config.subtitle_dir).await?;
        let template = get_subtitle_output_template(&self.config.subtitle_dir);
        let template = template.to_string_lossy();
        let sub_langs = self.config.sub_lang_arg();

        self.run_checked(
            "subtitle download",
            video_url,
            args(&[
                "--write-auto-sub",
                "--sub-lang",
                sub_langs.as_str(),
                "--skip-download",
                "--sub-format",
                "json3",
                "--output",
                &*template,
                video_url,
            ]),
        )
        .await?;

        Ok(())
    }

    /// Download (or reuse) subtitles and decode the first usable track.
    ///
    /// `Ok(None)` means the tool ran but no configured language produced a
    /// readable json3 file.
    pub async fn try_fetch_transcript(&self, video_url: &str) -> Result<Option<Transcript>> {
        let video_id = self.try_fetch_video_id(video_url).await?;
        let subtitle_dir = &self.config.subtitle_dir;
        let langs = &self.config.subtitle_langs;

        if self.config.reuse_subtitles
            && find_subtitles_in_cache(subtitle_dir, &video_id, langs).is_some()
        {
            if let Some(transcript) = self.load_first_track(&video_id).await {
                tracing::info!(video_id = %video_id, "reusing downloaded subtitles");
                return Ok(Some(transcript));
            }
            tracing::info!(video_id = %video_id, "cached subtitles unusable, downloading again");
        }

        self.download_subtitles(video_url).await?;
        Ok(self.load_first_track(&video_id).await)
    }

    /// First track, in language order, that exists and decodes
    async fn load_first_track(&self, video_id: &str) -> Option<Transcript> {
        for lang in &self.config.subtitle_langs {
            let path = get_subtitle_path(&self.config.subtitle_dir, video_id, lang);
            match load_subtitle_track(&path).await {
                Ok(Some(segments)) => {
                    return Some(Transcript {
                        video_id: video_id.to_string(),
                        language: lang.clone(),
                        segments,
                    });
                }
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unusable subtitle track");
                }
            }
        }

        None
    }

    pub async fn fetch_transcript(&self, video_url: &str) -> Option<Transcript> {
        match self.try_fetch_transcript(video_url).await {
            Ok(transcript) => transcript,
            Err(e) => {
                tracing::error!(error = %e, "failed to download transcript");
                None
            }
        }
    }
}

/// Read one json3 track; `Ok(None)` when the file does not exist
pub async fn load_subtitle_track(path: &Path) -> Result<Option<Vec<TranscriptSegment>>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let segments = parse_json3(&content).map_err(|e| TubeinfoError::MalformedSubtitles {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(Some(segments))
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
