use crate::DateTime;

/// The common fields of a tag, with ID3 specifics (frame ids, encodings,
/// `n/m` positions) already resolved.
#[derive(PartialEq, Debug, Default, Clone)]
pub struct Tags {
    pub title: Option<String>,

    pub album: Option<String>,
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub composer: Option<String>,

    pub grouping: Option<String>,

    pub genre: Option<String>,

    // ISO 8601
    pub date: Option<DateTime>,

    pub track_number: Option<u32>,
    pub track_total: Option<u32>,

    pub disc_number: Option<u32>,
    pub disc_total: Option<u32>,

    pub bpm: Option<u32>,
}

impl Tags {
    pub fn is_empty(&self) -> bool {
        *self == Tags::default()
    }
}
