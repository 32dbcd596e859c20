use std::path::{Path, PathBuf};

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("tubeinfo")
}

/// Default directory yt-dlp writes subtitle tracks into
pub fn get_subtitle_dir() -> PathBuf {
    get_root_cache_dir().join("subtitles")
}

/// Output template handed to yt-dlp; it appends `.<lang>.json3` itself
pub fn get_subtitle_output_template(subtitle_dir: &Path) -> PathBuf {
    subtitle_dir.join("%(id)s")
}

/// Path yt-dlp uses for one json3 subtitle track
pub fn get_subtitle_path(subtitle_dir: &Path, video_id: &str, lang: &str) -> PathBuf {
    subtitle_dir.join(format!("{}.{}.json3", video_id, lang))
}

/// Find an already-downloaded subtitle track, in language preference order
pub fn find_subtitles_in_cache(
    subtitle_dir: &Path,
    video_id: &str,
    langs: &[String],
) -> Option<PathBuf> {
    langs
        .iter()
        .map(|lang| get_subtitle_path(subtitle_dir, video_id, lang))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle_path_layout() {
        let path = get_subtitle_path(Path::new("/tmp"), "BEG49WICGEo", "en");
        assert_eq!(path, PathBuf::from("/tmp/BEG49WICGEo.en.json3"));
    }

    #[test]
    fn test_find_subtitles_respects_language_order() {
        let dir = tempfile::tempdir().unwrap();
        let langs = vec!["en".to_string(), "ar".to_string()];

        assert_eq!(find_subtitles_in_cache(dir.path(), "vid", &langs), None);

        std::fs::write(dir.path().join("vid.ar.json3"), "{}").unwrap();
        assert_eq!(
            find_subtitles_in_cache(dir.path(), "vid", &langs),
            Some(dir.path().join("vid.ar.json3"))
        );

        std::fs::write(dir.path().join("vid.en.json3"), "{}").unwrap();
        assert_eq!(
            find_subtitles_in_cache(dir.path(), "vid", &langs),
            Some(dir.path().join("vid.en.json3"))
        );
    }
}
