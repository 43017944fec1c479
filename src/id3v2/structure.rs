use std::convert::TryInto;

use crate::id3v2::tools::{decode_frame_id, decode_integer, decode_syncsafe};
use crate::id3v2::validator::{
    FrameHeaderValidator, HeaderValidator, TagHeaderValidator, TAG_HEADER_LENGTH,
};
use crate::{Error, HeaderKind, Unsupported};

// tag header layout
const MAJOR_VERSION: usize = 3;
const FLAGS: usize = 5;
const SIZE: usize = 6;

const UNSYNCHRONISATION: u8 = 0b1000_0000;
const EXTENDED_HEADER: u8 = 0b0100_0000;
const EXPERIMENTAL_INDICATOR: u8 = 0b0010_0000;
const FOOTER_PRESENT: u8 = 0b0001_0000;

// frame header layout
const FRAME_ID: usize = 0;
const FRAME_ID_LENGTH: usize = 4;
const FRAME_SIZE: usize = 4;
const FLAGS_STATUS: usize = 8;
const FLAGS_FORMAT: usize = 9;

const TAG_ALTER_PRESERVATION: u8 = 0b1000_0000;
const FILE_ALTER_PRESERVATION: u8 = 0b0100_0000;
const READ_ONLY: u8 = 0b0010_0000;
const COMPRESSION: u8 = 0b1000_0000;
const ENCRYPTION: u8 = 0b0100_0000;
const GROUPING_IDENTITY: u8 = 0b0010_0000;

// encoding byte + BOM + null terminator
const DEFAULT_TEXT_FRAME_SIZE: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHeader {
    pub version: u8,
    pub size: u32, // in bytes, excluding this header; goes up to 256 mb

    pub unsynchronisation: bool,
    pub extended_header: bool,
    pub experimental: bool,
    pub footer_present: bool,
}

impl TagHeader {
    /// Builds a header from a 10 byte window whose logical first byte is at `start`.
    pub fn from_bytes(bytes: &[u8], start: usize) -> Result<TagHeader, Error> {
        if !TagHeaderValidator.contains_header_bytes_at(bytes, start)? {
            return Err(Error::NotAHeader(HeaderKind::Tag));
        }

        let mut ordered = [0u8; TAG_HEADER_LENGTH];
        for (position, b) in ordered.iter_mut().enumerate() {
            *b = bytes[(position + start) % TAG_HEADER_LENGTH];
        }

        let flags = ordered[FLAGS];
        Ok(TagHeader {
            version: ordered[MAJOR_VERSION],
            size: decode_syncsafe(&size_bytes(&ordered, SIZE)),
            unsynchronisation: flags & UNSYNCHRONISATION != 0,
            extended_header: flags & EXTENDED_HEADER != 0,
            experimental: flags & EXPERIMENTAL_INDICATOR != 0,
            footer_present: flags & FOOTER_PRESENT != 0,
        })
    }

    /// Rejects the parts of ID3v2 this parser does not implement.
    pub fn check_supported(&self) -> Result<(), Error> {
        if self.version != 3 {
            return Err(Unsupported::Version(self.version).into());
        }
        if self.unsynchronisation {
            return Err(Unsupported::Unsynchronisation.into());
        }
        if self.extended_header {
            return Err(Unsupported::ExtendedHeader.into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    Text,
    Other,
}

impl FrameType {
    fn from_first_id_byte(b: u8) -> FrameType {
        if b == b'T' {
            FrameType::Text
        } else {
            FrameType::Other
        }
    }
}

/// Selector stored in the first payload byte of a text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Iso88591,
    /// UTF-16 with a byte order mark.
    Utf16,
}

impl TextEncoding {
    pub fn from_byte(b: u8) -> Option<TextEncoding> {
        match b {
            0x00 => Some(TextEncoding::Iso88591),
            0x01 => Some(TextEncoding::Utf16),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    pub frame_id: String,
    pub size: u32,

    // status flags
    pub tag_alter_preservation: bool,
    pub file_alter_preservation: bool,
    pub read_only: bool,

    // format flags
    pub compression: bool,
    pub encryption: bool,
    pub grouping_identity: bool,

    pub frame_type: FrameType,
}

impl FrameHeader {
    pub fn from_bytes(bytes: &[u8]) -> Result<FrameHeader, Error> {
        if !FrameHeaderValidator.contains_header_bytes(bytes) {
            return Err(Error::NotAHeader(HeaderKind::Frame));
        }

        let status = bytes[FLAGS_STATUS];
        let format = bytes[FLAGS_FORMAT];
        Ok(FrameHeader {
            frame_id: decode_frame_id(&bytes[FRAME_ID..FRAME_ID + FRAME_ID_LENGTH])?,
            size: decode_integer(&size_bytes(bytes, FRAME_SIZE)),

            tag_alter_preservation: status & TAG_ALTER_PRESERVATION != 0,
            file_alter_preservation: status & FILE_ALTER_PRESERVATION != 0,
            read_only: status & READ_ONLY != 0,

            compression: format & COMPRESSION != 0,
            encryption: format & ENCRYPTION != 0,
            grouping_identity: format & GROUPING_IDENTITY != 0,

            frame_type: FrameType::from_first_id_byte(bytes[FRAME_ID]),
        })
    }

    /// A header for a frame that is not present in the stream. Text frames get room
    /// for an encoding byte, a BOM and a terminator.
    pub fn default_for(frame_id: &str) -> FrameHeader {
        let frame_type = FrameType::from_first_id_byte(frame_id.bytes().next().unwrap_or(0));
        FrameHeader {
            frame_id: frame_id.to_string(),
            size: match frame_type {
                FrameType::Text => DEFAULT_TEXT_FRAME_SIZE,
                FrameType::Other => 0,
            },
            tag_alter_preservation: false,
            file_alter_preservation: false,
            read_only: false,
            compression: false,
            encryption: false,
            grouping_identity: false,
            frame_type,
        }
    }

    pub fn is_text(&self) -> bool {
        self.frame_type == FrameType::Text
    }
}

// callers have already checked the length, so the slice is always 4 bytes
fn size_bytes(bytes: &[u8], offset: usize) -> [u8; 4] {
    bytes[offset..offset + 4].try_into().unwrap_or([0; 4])
}
