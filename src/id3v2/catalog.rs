//! The ID3v2.3 text frames a [`Tag`] exposes by name.

use crate::id3v2::tag::Tag;
use crate::Error;

macro_rules! text_frames {
    ($(($variant:ident, $id:literal, $accessor:ident)),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TextFrameId {
            $($variant),*
        }

        impl TextFrameId {
            pub const ALL: &'static [TextFrameId] = &[$(TextFrameId::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match *self {
                    $(TextFrameId::$variant => $id),*
                }
            }

            pub fn from_frame_id(frame_id: &str) -> Option<TextFrameId> {
                match frame_id {
                    $($id => Some(TextFrameId::$variant),)*
                    _ => None,
                }
            }
        }

        impl Tag {
            $(
                #[doc = concat!("Text of the `", $id, "` frame, empty when the tag has none.")]
                pub fn $accessor(&self) -> Result<String, Error> {
                    self.text(TextFrameId::$variant)
                }
            )*
        }
    };
}

text_frames! {
    (Album, "TALB", album),
    (Bpm, "TBPM", bpm),
    (Composer, "TCOM", composer),
    (ContentType, "TCON", content_type),
    (Copyright, "TCOP", copyright),
    (Date, "TDAT", date),
    (PlaylistDelay, "TDLY", playlist_delay),
    (EncodedBy, "TENC", encoded_by),
    (Lyricist, "TEXT", lyricist),
    (FileType, "TFLT", file_type),
    (Time, "TIME", time),
    (ContentGroup, "TIT1", content_group),
    (Title, "TIT2", title),
    (Subtitle, "TIT3", subtitle),
    (InitialKey, "TKEY", initial_key),
    (Language, "TLAN", language),
    (Length, "TLEN", length),
    (MediaType, "TMED", media_type),
    (OriginalAlbum, "TOAL", original_album),
    (OriginalFilename, "TOFN", original_filename),
    (OriginalLyricist, "TOLY", original_lyricist),
    (OriginalArtist, "TOPE", original_artist),
    (OriginalReleaseYear, "TORY", original_release_year),
    (FileOwner, "TOWN", file_owner),
    (LeadPerformer, "TPE1", lead_performer),
    (Band, "TPE2", band),
    (Conductor, "TPE3", conductor),
    (Remixer, "TPE4", remixer),
    (PartOfSet, "TPOS", part_of_set),
    (Publisher, "TPUB", publisher),
    (TrackNumber, "TRCK", track_number),
    (RecordingDates, "TRDA", recording_dates),
    (RadioStation, "TRSN", radio_station),
    (RadioStationOwner, "TRSO", radio_station_owner),
    (AudioSize, "TSIZ", audio_size),
    (Isrc, "TSRC", isrc),
    (EncodingSettings, "TSSE", encoding_settings),
    (Year, "TYER", year),
}
