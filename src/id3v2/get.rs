use crate::id3v2::regex::parse_position;
use crate::id3v2::tag::Tag;
use crate::{DateTime, Tags};

// frames synthesized by `Tag::get_frame` never count: only what the stream carried
pub fn tags(tag: &Tag) -> Tags {
    let mut t: Tags = Default::default();

    // v2.3 spreads the date over three frames
    let mut year = String::new();
    let mut tdat = String::new();
    let mut time = String::new();

    for frame in tag.frames() {
        let text = match frame.get_text() {
            Ok(s) if !s.is_empty() => s,
            _ => continue,
        };

        match frame.frame_id() {
            "TIT2" => t.title = Some(text),

            "TALB" => t.album = Some(text),
            "TPE1" => t.artist = Some(text),
            "TPE2" => t.album_artist = Some(text),
            "TCOM" => t.composer = Some(text),

            "TIT1" => t.grouping = Some(text),

            "TCON" => t.genre = Some(text),

            "TYER" => year = text,
            "TDAT" => tdat = text,
            "TIME" => time = text,

            "TRCK" => {
                let (number, total) = parse_position(&text);
                t.track_number = number;
                t.track_total = total;
            }
            "TPOS" => {
                let (number, total) = parse_position(&text);
                t.disc_number = number;
                t.disc_total = total;
            }

            "TBPM" => t.bpm = text.trim().parse().ok(),

            _ => (),
        }
    }

    t.date = DateTime::from_id3v23(&year, &tdat, &time);
    t
}
