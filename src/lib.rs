#[macro_use]
extern crate lazy_static;

mod types;
pub use crate::types::DateTime;
pub use crate::types::Tags;

pub mod id3v2;

mod dispatch;
mod tools;


pub use crate::dispatch::get_tags;
pub use crate::dispatch::scan;

pub use crate::id3v2::{Event, Frame, FrameHeader, Id3Stream, Tag, TagHeader, TextFrameId};

use std::io;

/// Which of the two ID3v2 header layouts a structural error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Tag,
    Frame,
}

/// A byte arrived that the tag or frame state machine cannot accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    ByteAfterComplete,
    NoFrame,
    NonZeroPadding(u8),
    FrameIncomplete,
    FrameHeaderIncomplete,
    NotATextFrame,
    TextFrameIncomplete,
    Truncated,
}

/// Valid ID3v2 data this parser deliberately does not handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unsupported {
    Version(u8),
    Unsynchronisation,
    ExtendedHeader,
    DuplicateFrame(String),
    CompressedTextFrame(String),
    EncryptedTextFrame(String),
    UnknownEncoding(u8),
    InvalidFrameId,
}

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    NotAHeader(HeaderKind),
    Protocol(Violation),
    Unsupported(Unsupported),
    /// The rotation offset handed to the tag header validator lies outside the window.
    StartOutOfRange { start: usize, length: usize },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Structural,
    Protocol,
    Unsupported,
    Addressing,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::IOError(_) => ErrorKind::Io,
            Error::NotAHeader(_) => ErrorKind::Structural,
            Error::Protocol(_) => ErrorKind::Protocol,
            Error::Unsupported(_) => ErrorKind::Unsupported,
            Error::StartOutOfRange { .. } => ErrorKind::Addressing,
        }
    }
}

use std::fmt;

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::ByteAfterComplete => write!(f, "the tag or frame is already complete"),
            Violation::NoFrame => write!(f, "there is no frame to add the byte to"),
            Violation::NonZeroPadding(b) => {
                write!(f, "padding must be zero, found 0x{:02X}", b)
            }
            Violation::FrameIncomplete => {
                write!(f, "the last frame must be complete before the tag can complete")
            }
            Violation::FrameHeaderIncomplete => {
                write!(f, "the tag ended inside a frame header")
            }
            Violation::NotATextFrame => write!(f, "text can only be read from TEXT frames"),
            Violation::TextFrameIncomplete => {
                write!(f, "text can only be read from complete frames")
            }
            Violation::Truncated => write!(f, "the stream ended before the tag was complete"),
        }
    }
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Unsupported::Version(v) => write!(f, "ID3v2.{} is not supported", v),
            Unsupported::Unsynchronisation => write!(f, "unsynchronised tags are not supported"),
            Unsupported::ExtendedHeader => write!(f, "extended headers are not supported"),
            Unsupported::DuplicateFrame(ref id) => write!(f, "duplicate frame {}", id),
            Unsupported::CompressedTextFrame(ref id) => {
                write!(f, "compressed text frame {}", id)
            }
            Unsupported::EncryptedTextFrame(ref id) => write!(f, "encrypted text frame {}", id),
            Unsupported::UnknownEncoding(b) => {
                write!(f, "0x{:02X} is not a known text encoding", b)
            }
            Unsupported::InvalidFrameId => {
                write!(f, "frame id contains characters that are not A-Z or 0-9")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::IOError(ref e) => write!(f, "IO error: {}", e),
            Error::NotAHeader(HeaderKind::Tag) => {
                write!(f, "bytes do not contain an ID3v2 tag header")
            }
            Error::NotAHeader(HeaderKind::Frame) => {
                write!(f, "bytes do not contain an ID3v2 frame header")
            }
            Error::Protocol(ref v) => write!(f, "malformed tag: {}", v),
            Error::Unsupported(ref u) => write!(f, "not implemented: {}", u),
            Error::StartOutOfRange { start, length } => write!(
                f,
                "start position {} is not within a header of {} bytes",
                start, length
            ),
        }
    }
}

use std::error;
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}
impl From<Violation> for Error {
    fn from(v: Violation) -> Error {
        Error::Protocol(v)
    }
}
impl From<Unsupported> for Error {
    fn from(u: Unsupported) -> Error {
        Error::Unsupported(u)
    }
}
