extern crate regex;
use self::regex::Regex;

/// Splits a `TRCK`/`TPOS` value of the form `n` or `n/m` into its two numbers.
pub fn parse_position(input: &str) -> (Option<u32>, Option<u32>) {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\s*(\d+)\s*(?:/\s*(\d+))?\s*$").unwrap();
    }

    match RE.captures(input) {
        None => (None, None),
        Some(c) => (
            c.get(1).and_then(|m| m.as_str().parse().ok()),
            c.get(2).and_then(|m| m.as_str().parse().ok()),
        ),
    }
}
