use crate::{Error, Unsupported};

/// Interprets four bytes as a big-endian integer, index 0 being the most significant byte.
pub fn decode_integer(input: &[u8; 4]) -> u32 {
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        result |= (*b as u32) << (8 * (3 - i));
    }
    result
}

/// Decodes a syncsafe integer: every byte contributes its low 7 bits.
///
/// A set high bit is masked away rather than rejected; the header validators are the
/// ones that refuse such input.
pub fn decode_syncsafe(input: &[u8; 4]) -> u32 {
    let raw = decode_integer(input);
    let mut result: u32 = 0;
    // walk the four 8 bit groups from the most significant one down
    // (0000 0001 0111 1111 => 1111 1111)
    let mut mask: u32 = 0x7F00_0000;
    while mask != 0 {
        result >>= 1;
        result |= raw & mask;
        mask >>= 8;
    }
    result
}

/// Inverse of [`decode_syncsafe`]. Bits above the 28th are dropped.
pub fn encode_syncsafe(input: u32) -> [u8; 4] {
    let mut result = [0; 4];
    for i in 0..4 {
        result[i] = ((input >> (7 * (3 - i))) & 0x7F) as u8;
    }
    result
}

pub fn decode_frame_id(input: &[u8]) -> Result<String, Error> {
    let mut s = String::with_capacity(input.len());
    for c in input.iter() {
        if c.is_ascii_uppercase() || c.is_ascii_digit() {
            s.push(*c as char);
        } else {
            return Err(Unsupported::InvalidFrameId.into());
        }
    }
    Ok(s)
}
