//! Byte-position rule tables for the two fixed-length ID3v2 headers.

use crate::Error;

pub const TAG_HEADER_LENGTH: usize = 10;
pub const FRAME_HEADER_LENGTH: usize = 10;

const FRAME_ID_BYTES: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A constraint on the byte found at one header position.
#[derive(Debug, Clone, Copy)]
pub enum BytePredicate {
    /// The byte must equal one of these values.
    OneOf(&'static [u8]),
    /// These bit indices (0 = least significant) must be zero, the others are free.
    BitsClear(&'static [u8]),
    Any,
}

impl BytePredicate {
    pub fn accepts(&self, byte: u8) -> bool {
        match *self {
            BytePredicate::OneOf(set) => set.contains(&byte),
            BytePredicate::BitsClear(bits) => bits.iter().all(|&bit| byte & (1 << bit) == 0),
            BytePredicate::Any => true,
        }
    }
}

// ID3v2/file identifier   "ID3"
// ID3v2 version           $03 00
// ID3v2 flags             %abcd0000
// ID3v2 size              4 * %0xxxxxxx
const TAG_HEADER_RULES: [BytePredicate; TAG_HEADER_LENGTH] = [
    BytePredicate::OneOf(b"I"),
    BytePredicate::OneOf(b"D"),
    BytePredicate::OneOf(b"3"),
    BytePredicate::OneOf(&[0x02, 0x03, 0x04]),
    BytePredicate::OneOf(&[0x00]),
    BytePredicate::BitsClear(&[0, 1, 2, 3]),
    BytePredicate::BitsClear(&[7]),
    BytePredicate::BitsClear(&[7]),
    BytePredicate::BitsClear(&[7]),
    BytePredicate::BitsClear(&[7]),
];

// Frame ID   $xx xx xx xx  (four characters)
// Size       $xx xx xx xx
// Flags      %abc00000 %ijk00000
const FRAME_HEADER_RULES: [BytePredicate; FRAME_HEADER_LENGTH] = [
    BytePredicate::OneOf(FRAME_ID_BYTES),
    BytePredicate::OneOf(FRAME_ID_BYTES),
    BytePredicate::OneOf(FRAME_ID_BYTES),
    BytePredicate::OneOf(FRAME_ID_BYTES),
    BytePredicate::Any,
    BytePredicate::Any,
    BytePredicate::Any,
    BytePredicate::Any,
    BytePredicate::BitsClear(&[0, 1, 2, 3, 4]),
    BytePredicate::BitsClear(&[0, 1, 2, 3, 4]),
];

pub trait HeaderValidator {
    const HEADER_LENGTH: usize;

    /// Does `byte` satisfy the rule for logical header position `position`?
    fn check_byte(&self, position: usize, byte: u8) -> bool;

    fn contains_header_bytes(&self, bytes: &[u8]) -> bool {
        bytes.len() == Self::HEADER_LENGTH
            && bytes
                .iter()
                .enumerate()
                .all(|(position, &byte)| self.check_byte(position, byte))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TagHeaderValidator;

impl HeaderValidator for TagHeaderValidator {
    const HEADER_LENGTH: usize = TAG_HEADER_LENGTH;

    fn check_byte(&self, position: usize, byte: u8) -> bool {
        TAG_HEADER_RULES
            .get(position)
            .map_or(false, |rule| rule.accepts(byte))
    }
}

impl TagHeaderValidator {
    /// Validates a window whose logical first byte sits at physical index `start` and
    /// wraps around the end.
    pub fn contains_header_bytes_at(&self, bytes: &[u8], start: usize) -> Result<bool, Error> {
        if start >= Self::HEADER_LENGTH {
            return Err(Error::StartOutOfRange {
                start,
                length: Self::HEADER_LENGTH,
            });
        }
        if bytes.len() != Self::HEADER_LENGTH {
            return Ok(false);
        }

        Ok((0..Self::HEADER_LENGTH).all(|position| {
            let physical = (position + start) % Self::HEADER_LENGTH;
            self.check_byte(position, bytes[physical])
        }))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FrameHeaderValidator;

impl HeaderValidator for FrameHeaderValidator {
    const HEADER_LENGTH: usize = FRAME_HEADER_LENGTH;

    fn check_byte(&self, position: usize, byte: u8) -> bool {
        FRAME_HEADER_RULES
            .get(position)
            .map_or(false, |rule| rule.accepts(byte))
    }
}
