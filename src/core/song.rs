use serde::{Deserialize, Serialize};

/// One catalog entry as listed by a karaoke provider.
///
/// Serialized with camelCase keys (`songId`, `title`, `singer`, `lyricist`,
/// `composer`); clients of the HTTP endpoint depend on that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Provider-native catalog number
    pub song_id: String,
    pub title: String,
    #[serde(default)]
    pub singer: String,
    #[serde(default)]
    pub lyricist: String,
    #[serde(default)]
    pub composer: String,
}

impl Song {
    pub fn new(song_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            song_id: song_id.into(),
            title: title.into(),
            singer: String::new(),
            lyricist: String::new(),
            composer: String::new(),
        }
    }

    pub fn with_singer(mut self, singer: impl Into<String>) -> Self {
        self.singer = singer.into();
        self
    }

    pub fn with_lyricist(mut self, lyricist: impl Into<String>) -> Self {
        self.lyricist = lyricist.into();
        self
    }

    pub fn with_composer(mut self, composer: impl Into<String>) -> Self {
        self.composer = composer.into();
        self
    }
}
