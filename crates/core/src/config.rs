use std::path::PathBuf;

use crate::cache::get_subtitle_dir;

/// Environment variable overriding the yt-dlp binary
pub const YTDLP_BIN_ENV: &str = "TUBEINFO_YTDLP";

const DEFAULT_YTDLP_BIN: &str = "yt-dlp";

/// Settings shared by every fetch operation
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub ytdlp_bin: PathBuf,
    pub subtitle_dir: PathBuf,
    /// Subtitle tracks to request, in preference order
    pub subtitle_langs: Vec<String>,
    /// Skip the subtitle download when a track is already on disk
    pub reuse_subtitles: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            ytdlp_bin: PathBuf::from(DEFAULT_YTDLP_BIN),
            subtitle_dir: get_subtitle_dir(),
            subtitle_langs: vec!["en".to_string(), "ar".to_string()],
            reuse_subtitles: true,
        }
    }
}

impl FetchConfig {
    /// Defaults, with the yt-dlp binary taken from the environment when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(bin) = std::env::var(YTDLP_BIN_ENV) {
            if !bin.trim().is_empty() {
                config.ytdlp_bin = PathBuf::from(bin);
            }
        }
        config
    }

    /// Comma-separated list for `--sub-lang`
    pub fn sub_lang_arg(&self) -> String {
        self.subtitle_langs.join(",")
    }
}
