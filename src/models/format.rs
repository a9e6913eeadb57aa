use serde::Serialize;

/// Format used by `/download` when none is requested, and pinned by `/mp3`
pub const DEFAULT_FORMAT: &str = "mp3";

/// Immutable set of output formats the conversion service can produce
///
/// Audio formats are named by codec, video formats by vertical resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatCatalog {
    audio: Vec<String>,
    video: Vec<String>,
}

impl Default for FormatCatalog {
    fn default() -> Self {
        Self::new(
            ["mp3"],
            ["144", "240", "360", "480", "720", "1080"],
        )
    }
}

impl FormatCatalog {
    pub fn new<A, V>(audio: A, video: V) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            audio: audio.into_iter().map(Into::into).collect(),
            video: video.into_iter().map(Into::into).collect(),
        }
    }

    pub fn audio(&self) -> &[String] {
        &self.audio
    }

    pub fn video(&self) -> &[String] {
        &self.video
    }

    /// Canonical list: video resolutions ascending, then audio formats
    pub fn all(&self) -> Vec<String> {
        self.video.iter().chain(self.audio.iter()).cloned().collect()
    }

    pub fn contains(&self, format: &str) -> bool {
        self.is_audio(format) || self.video.iter().any(|f| f == format)
    }

    pub fn is_audio(&self, format: &str) -> bool {
        self.audio.iter().any(|f| f == format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = FormatCatalog::default();
        assert_eq!(
            catalog.all(),
            vec!["144", "240", "360", "480", "720", "1080", "mp3"]
        );
    }

    #[test]
    fn test_contains() {
        let catalog = FormatCatalog::default();
        assert!(catalog.contains("mp3"));
        assert!(catalog.contains("1080"));
        assert!(!catalog.contains("4320"));
        assert!(!catalog.contains("MP3"));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn test_is_audio() {
        let catalog = FormatCatalog::default();
        assert!(catalog.is_audio(DEFAULT_FORMAT));
        assert!(!catalog.is_audio("720"));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = FormatCatalog::new(["opus", "mp3"], Vec::<String>::new());
        assert_eq!(catalog.all(), vec!["opus", "mp3"]);
        assert!(!catalog.contains("720"));
    }
}
