/// Information used to identify the beatmap, the `[Metadata]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Romanised song title.
    pub title: Option<String>,
    /// Song title.
    pub title_unicode: Option<String>,
    /// Romanised song artist.
    pub artist: Option<String>,
    /// Song artist.
    pub artist_unicode: Option<String>,
    /// Beatmap creator.
    pub creator: Option<String>,
    /// Difficulty name.
    pub version: Option<String>,
    /// Original media the song was produced for.
    pub source: Option<String>,
    /// Search terms.
    pub tags: Vec<String>,
    /// Difficulty ID.
    pub beatmap_id: Option<i32>,
    /// Beatmap ID.
    pub beatmap_set_id: Option<i32>,
}
