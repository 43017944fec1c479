use std::collections::VecDeque;

use log::{debug, warn};

use crate::id3v2::structure::TagHeader;
use crate::id3v2::tag::Tag;
use crate::id3v2::validator::TagHeaderValidator;
use crate::id3v2::window::HeaderWindow;
use crate::{Error, ErrorKind, Violation};

/// Something the scanner noticed while consuming the stream.
#[derive(Debug)]
pub enum Event {
    TagFound(Tag),
    /// A tag candidate was discarded. Other candidates and the scan itself carry on.
    TagError(Error),
}

/// Finds ID3v2.3 tags anywhere in a byte stream, one byte at a time.
///
/// Every position where the last ten bytes look like a tag header opens a new
/// candidate [`Tag`], and every later byte is fed to every open candidate. A false
/// positive (audio data that happens to look like a header) fails on its own without
/// costing a real tag that starts nearby.
#[derive(Debug, Default)]
pub struct Id3Stream {
    window: HeaderWindow,
    tags: Vec<Tag>,
    events: VecDeque<Event>,
}

impl Id3Stream {
    pub fn new() -> Id3Stream {
        Default::default()
    }

    /// Consumes the next byte of the stream.
    ///
    /// Tag level problems are reported as [`Event::TagError`]; only a broken
    /// window rotation is returned as an error.
    pub fn push_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.check_tags(byte);
        self.check_header(byte)
    }

    pub fn feed(&mut self, bytes: &[u8]) -> Result<(), Error> {
        for &byte in bytes {
            self.push_byte(byte)?;
        }
        Ok(())
    }

    /// Signals the end of the stream: every tag still open is reported as truncated.
    pub fn finish(&mut self) {
        while let Some(tag) = self.tags.pop() {
            warn!(
                "id3v2: stream ended {} bytes into a tag of {} bytes",
                tag.bytes_consumed(),
                tag.header().size
            );
            self.events
                .push_back(Event::TagError(Violation::Truncated.into()));
        }
        self.window.clear();
    }

    pub fn next_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain(..)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Number of tag candidates currently being parsed.
    pub fn open_tags(&self) -> usize {
        self.tags.len()
    }

    // walk backwards so removing a tag does not skip the next one
    fn check_tags(&mut self, byte: u8) {
        for i in (0..self.tags.len()).rev() {
            match self.tags[i].add_byte(byte) {
                Err(e) => {
                    // possibly a false positive on the header, or a broken tag
                    warn!("id3v2: discarding tag candidate: {}", e);
                    self.tags.remove(i);
                    self.events.push_back(Event::TagError(e));
                }
                Ok(()) if self.tags[i].is_complete() => {
                    let tag = self.tags.remove(i);
                    debug!("id3v2: found tag with {} frames", tag.frames().len());
                    self.events.push_back(Event::TagFound(tag));
                }
                Ok(()) => (),
            }
        }
    }

    fn check_header(&mut self, byte: u8) -> Result<(), Error> {
        self.window.insert(byte);
        let (bytes, start) = match self.window.window() {
            Some(w) => w,
            None => return Ok(()),
        };
        if !TagHeaderValidator.contains_header_bytes_at(bytes, start)? {
            return Ok(());
        }

        let header = match TagHeader::from_bytes(bytes, start) {
            Ok(header) => header,
            Err(e) if e.kind() == ErrorKind::Addressing => return Err(e),
            Err(e) => {
                self.events.push_back(Event::TagError(e));
                return Ok(());
            }
        };
        if let Err(e) = header.check_supported() {
            warn!("id3v2: skipping tag: {}", e);
            self.events.push_back(Event::TagError(e));
            return Ok(());
        }

        debug!(
            "id3v2: tag header v2.{} with {} bytes",
            header.version, header.size
        );
        let tag = Tag::new(header);
        if tag.is_complete() {
            self.events.push_back(Event::TagFound(tag));
        } else {
            self.tags.push(tag);
        }
        Ok(())
    }
}
