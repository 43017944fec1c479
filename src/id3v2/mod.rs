//! Incremental ID3v2.3 parsing.
//!
//! Bytes flow from [`Id3Stream`] into every open [`Tag`], and from a tag into its
//! current [`Frame`]. Nothing here reads from a source by itself; see
//! [`crate::scan`] for a `Read` based driver.

mod catalog;
mod frame;
mod get;
mod regex;
mod stream;
mod structure;
mod tag;
pub mod tools;
pub mod validator;
mod window;

pub use self::catalog::TextFrameId;
pub use self::frame::{Frame, FrameState};
pub use self::stream::{Event, Id3Stream};
pub use self::structure::{FrameHeader, FrameType, TagHeader, TextEncoding};
pub use self::tag::{Tag, TagState};
pub use self::window::HeaderWindow;

#[cfg(test)]
mod tests;
