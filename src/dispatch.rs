use std::fs::File;
use std::io::prelude::*;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use crate::id3v2::{Event, Id3Stream, Tag};
use crate::Error;

const CHUNK_SIZE: usize = 8192;

/// Runs the whole of `input` through an [`Id3Stream`] and collects its events,
/// including a truncation error for a tag cut off by the end of the input.
pub fn scan<R: Read>(input: &mut R) -> Result<Vec<Event>, Error> {
    let mut stream = Id3Stream::new();
    let mut events = Vec::new();
    let mut buf = [0; CHUNK_SIZE];

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(ref e) if e.kind() == IoErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        stream.feed(&buf[..n])?;
        events.extend(stream.drain_events());
    }

    stream.finish();
    events.extend(stream.drain_events());
    Ok(events)
}

/// Every complete ID3v2.3 tag in the file at `path`, in stream order.
pub fn get_tags<P: AsRef<Path>>(path: P) -> Result<Vec<Tag>, Error> {
    let mut file = File::open(path)?;

    Ok(scan(&mut file)?
        .into_iter()
        .filter_map(|event| match event {
            Event::TagFound(tag) => Some(tag),
            Event::TagError(_) => None,
        })
        .collect())
}
