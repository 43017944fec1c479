use log::trace;

use crate::id3v2::structure::{FrameHeader, TextEncoding};
use crate::tools::encoding::{decode_iso_8859_1, decode_utf16};
use crate::{Error, Unsupported, Violation};

// frames claim their size from the stream, so never trust it for an up-front allocation
const MAX_PREALLOCATION: usize = 4096;

// UTF-16, BOM (little endian), empty null-terminated string
const DEFAULT_TEXT_DATA: [u8; 5] = [0x01, 0xFF, 0xFE, 0x00, 0x00];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    AddingData,
    Complete,
}

/// One ID3v2 frame, filled byte by byte until it holds `header.size` bytes.
#[derive(Debug, Clone)]
pub struct Frame {
    header: FrameHeader,
    data: Vec<u8>,
    state: FrameState,
    is_in_source_stream: bool,
    text_encoding: Option<TextEncoding>,
}

impl Frame {
    pub fn new(header: FrameHeader) -> Frame {
        let state = if header.size == 0 {
            FrameState::Complete
        } else {
            FrameState::AddingData
        };
        let capacity = (header.size as usize).min(MAX_PREALLOCATION);
        Frame {
            header,
            data: Vec::with_capacity(capacity),
            state,
            is_in_source_stream: false,
            text_encoding: None,
        }
    }

    /// A stand-in for a frame that does not occur in the tag. Text frames hold an
    /// empty string.
    pub fn default_for(frame_id: &str) -> Frame {
        let mut frame = Frame::new(FrameHeader::default_for(frame_id));
        if frame.header.is_text() {
            frame.data.extend_from_slice(&DEFAULT_TEXT_DATA);
            frame.text_encoding = Some(TextEncoding::Utf16);
            frame.state = FrameState::Complete;
        }
        frame
    }

    pub fn add_byte(&mut self, byte: u8) -> Result<(), Error> {
        if self.state == FrameState::Complete {
            return Err(Violation::ByteAfterComplete.into());
        }

        // the first byte of a text frame selects the encoding
        if self.header.is_text() && self.data.is_empty() {
            match TextEncoding::from_byte(byte) {
                Some(encoding) => self.text_encoding = Some(encoding),
                None => return Err(Unsupported::UnknownEncoding(byte).into()),
            }
        }

        self.data.push(byte);
        if self.data.len() as u64 == self.header.size as u64 {
            trace!("id3v2: frame {} complete", self.header.frame_id);
            self.state = FrameState::Complete;
        }
        Ok(())
    }

    /// Decodes the payload of a complete text frame, without its encoding byte.
    pub fn get_text(&self) -> Result<String, Error> {
        if !self.header.is_text() {
            return Err(Violation::NotATextFrame.into());
        }
        if self.state != FrameState::Complete {
            return Err(Violation::TextFrameIncomplete.into());
        }

        let payload = self.data.get(1..).unwrap_or(&[]);
        Ok(match self.text_encoding {
            Some(TextEncoding::Iso88591) => decode_iso_8859_1(payload),
            Some(TextEncoding::Utf16) => decode_utf16(payload),
            // a complete text frame with no payload at all
            None => String::new(),
        })
    }

    pub fn header(&self) -> &FrameHeader {
        &self.header
    }

    pub fn frame_id(&self) -> &str {
        &self.header.frame_id
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == FrameState::Complete
    }

    /// False for frames synthesized by [`Frame::default_for`].
    pub fn is_in_source_stream(&self) -> bool {
        self.is_in_source_stream
    }

    pub(crate) fn mark_in_source_stream(&mut self) {
        self.is_in_source_stream = true;
    }

    pub fn text_encoding(&self) -> Option<TextEncoding> {
        self.text_encoding
    }
}
