use std::borrow::Cow;

use log::trace;

use crate::id3v2::catalog::TextFrameId;
use crate::id3v2::frame::Frame;
use crate::id3v2::get;
use crate::id3v2::structure::{FrameHeader, TagHeader};
use crate::id3v2::validator::FRAME_HEADER_LENGTH;
use crate::{Error, Tags, Unsupported, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagState {
    CreatingFrameHeader,
    AddingFrameBytes,
    Padding,
    Complete,
}

/// One ID3v2 tag, built from the bytes that follow its header.
///
/// Every byte goes through [`Tag::add_byte`]; the tag completes once exactly
/// `header.size` bytes of frame headers, frame bodies and padding were consumed.
#[derive(Debug, Clone)]
pub struct Tag {
    header: TagHeader,
    frames: Vec<Frame>,
    frame_header_bytes: Vec<u8>,
    state: TagState,
    count: u32,
}

impl Tag {
    pub fn new(header: TagHeader) -> Tag {
        // nothing to wait for
        let state = if header.size == 0 {
            TagState::Complete
        } else {
            TagState::CreatingFrameHeader
        };
        Tag {
            header,
            frames: Vec::new(),
            frame_header_bytes: Vec::with_capacity(FRAME_HEADER_LENGTH),
            state,
            count: 0,
        }
    }

    pub fn add_byte(&mut self, byte: u8) -> Result<(), Error> {
        match self.state {
            TagState::CreatingFrameHeader => self.add_byte_to_frame_header(byte)?,
            TagState::AddingFrameBytes => self.add_byte_to_frame(byte)?,
            TagState::Padding => {
                if byte != 0x00 {
                    return Err(Violation::NonZeroPadding(byte).into());
                }
            }
            TagState::Complete => return Err(Violation::ByteAfterComplete.into()),
        }

        self.increment_count()
    }

    /// The frame with `frame_id`, or a default frame when the tag has none.
    pub fn get_frame(&self, frame_id: &str) -> Cow<'_, Frame> {
        match self.frames.iter().find(|f| f.frame_id() == frame_id) {
            Some(frame) => Cow::Borrowed(frame),
            None => Cow::Owned(Frame::default_for(frame_id)),
        }
    }

    pub fn text(&self, id: TextFrameId) -> Result<String, Error> {
        self.get_frame(id.as_str()).get_text()
    }

    /// A normalized view of the common text frames found in the stream.
    pub fn tags(&self) -> Tags {
        get::tags(self)
    }

    pub fn header(&self) -> &TagHeader {
        &self.header
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn state(&self) -> TagState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TagState::Complete
    }

    /// Bytes of the tag body consumed so far.
    pub fn bytes_consumed(&self) -> u32 {
        self.count
    }

    fn add_byte_to_frame_header(&mut self, byte: u8) -> Result<(), Error> {
        if byte == 0x00 && self.frame_header_bytes.is_empty() {
            return self.change_state(TagState::Padding);
        }

        self.frame_header_bytes.push(byte);
        if self.frame_header_bytes.len() == FRAME_HEADER_LENGTH {
            let header = FrameHeader::from_bytes(&self.frame_header_bytes)?;
            let mut frame = Frame::new(header);
            frame.mark_in_source_stream();
            self.frame_header_bytes.clear();
            self.check_implementation(&frame)?;

            trace!(
                "id3v2: frame {} with {} bytes",
                frame.frame_id(),
                frame.header().size
            );
            let has_body = !frame.is_complete();
            self.frames.push(frame);
            if has_body {
                self.state = TagState::AddingFrameBytes;
            }
        }
        Ok(())
    }

    fn add_byte_to_frame(&mut self, byte: u8) -> Result<(), Error> {
        let frame = match self.frames.last_mut() {
            Some(frame) => frame,
            None => return Err(Violation::NoFrame.into()),
        };

        frame.add_byte(byte)?;
        if frame.is_complete() {
            self.change_state(TagState::CreatingFrameHeader)?;
        }
        Ok(())
    }

    // duplicate frames and packed text frames abort the whole tag
    fn check_implementation(&self, frame: &Frame) -> Result<(), Error> {
        let header = frame.header();
        if self.frames.iter().any(|f| f.frame_id() == header.frame_id) {
            return Err(Unsupported::DuplicateFrame(header.frame_id.clone()).into());
        }
        if header.is_text() && header.compression {
            return Err(Unsupported::CompressedTextFrame(header.frame_id.clone()).into());
        }
        if header.is_text() && header.encryption {
            return Err(Unsupported::EncryptedTextFrame(header.frame_id.clone()).into());
        }
        Ok(())
    }

    fn increment_count(&mut self) -> Result<(), Error> {
        self.count += 1;
        if self.count == self.header.size {
            self.change_state(TagState::Complete)?;
        }
        Ok(())
    }

    fn change_state(&mut self, state: TagState) -> Result<(), Error> {
        let done_with_last_frame = self.frames.last().map_or(true, Frame::is_complete);
        if !done_with_last_frame && (state == TagState::Complete || state == TagState::Padding) {
            return Err(Violation::FrameIncomplete.into());
        }
        if state == TagState::Complete && !self.frame_header_bytes.is_empty() {
            return Err(Violation::FrameHeaderIncomplete.into());
        }

        self.state = state;
        Ok(())
    }
}
