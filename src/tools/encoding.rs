use encoding::all::{ISO_8859_1, UTF_16BE, UTF_16LE};
use encoding::{DecoderTrap, Encoding};

// text frames are null-terminated, but the terminator is not part of the value
fn strip_terminator(s: String) -> String {
    s.trim_end_matches('\0').to_string()
}

pub fn decode_iso_8859_1(input: &[u8]) -> String {
    strip_terminator(
        ISO_8859_1
            .decode(input, DecoderTrap::Replace)
            .unwrap_or_default(),
    )
}

pub fn decode_utf16(input: &[u8]) -> String {
    match input.get(0..2) {
        Some([0xFF, 0xFE]) => UTF_16LE.decode(&input[2..], DecoderTrap::Replace),
        Some([0xFE, 0xFF]) => UTF_16BE.decode(&input[2..], DecoderTrap::Replace),
        // in case of no BOM, assume big endian
        _ => UTF_16BE.decode(input, DecoderTrap::Replace),
    }
    .map(strip_terminator)
    .unwrap_or_default()
}
