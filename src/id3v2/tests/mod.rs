use proptest::prelude::*;

use crate::id3v2::tools::encode_syncsafe;
use crate::id3v2::{Event, Id3Stream, Tag};
use crate::{Error, Unsupported, Violation};


pub fn tag_header(version: u8, flags: u8, size: u32) -> Vec<u8> {
    let mut vec = vec![b'I', b'D', b'3', version, 0x00, flags];
    vec.extend_from_slice(&encode_syncsafe(size));
    vec
}

pub fn frame(id: &str, flags: [u8; 2], payload: &[u8]) -> Vec<u8> {
    let mut vec = id.as_bytes().to_vec();
    vec.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    vec.extend_from_slice(&flags);
    vec.extend_from_slice(payload);
    vec
}

// ISO-8859-1, which is plain ASCII for the strings used here
pub fn text_frame(id: &str, text: &str) -> Vec<u8> {
    let mut payload = vec![0x00];
    payload.extend_from_slice(text.as_bytes());
    frame(id, [0, 0], &payload)
}

pub fn tag(frames: &[Vec<u8>], padding: usize) -> Vec<u8> {
    let mut body = frames.concat();
    body.resize(body.len() + padding, 0);
    let mut vec = tag_header(3, 0, body.len() as u32);
    vec.extend(body);
    vec
}

fn run(bytes: &[u8]) -> (Vec<Tag>, Vec<Error>) {
    let mut stream = Id3Stream::new();
    stream.feed(bytes).unwrap();
    split(stream.drain_events().collect())
}

fn split(events: Vec<Event>) -> (Vec<Tag>, Vec<Error>) {
    let mut tags = Vec::new();
    let mut errors = Vec::new();
    for event in events {
        match event {
            Event::TagFound(tag) => tags.push(tag),
            Event::TagError(e) => errors.push(e),
        }
    }
    (tags, errors)
}

// mpeg frame sync and some payload, without any 'I'
const AUDIO: &[u8] = b"\xFF\xFB\x90\x64\x00\x0F\xF0\x00\x00\x69\x00\x00\x00\x08\x00\x00\x0D";

#[test]
fn finds_single_tag() {
    let bytes = tag(
        &[frame("TIT2", [0, 0], &[0x01, 0xFF, 0xFE, b'E', 0, b'N', 0, 0, 0])],
        0,
    );
    assert_eq!(bytes.len(), 29);

    let (tags, errors) = run(&bytes);
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].header().size, 19);
    assert_eq!(tags[0].title().unwrap(), "EN");
}

#[test]
fn finds_tag_between_audio() {
    let mut bytes = AUDIO.to_vec();
    bytes.extend(tag(&[text_frame("TIT2", "Title"), text_frame("TPE1", "Artist")], 64));
    bytes.extend_from_slice(AUDIO);

    let mut stream = Id3Stream::new();
    stream.feed(&bytes).unwrap();
    assert_eq!(stream.open_tags(), 0);

    let (tags, errors) = split(stream.drain_events().collect());
    assert!(errors.is_empty());
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].lead_performer().unwrap(), "Artist");
}

#[test]
fn finds_consecutive_tags() {
    let mut bytes = tag(&[text_frame("TIT2", "one")], 4);
    bytes.extend_from_slice(AUDIO);
    bytes.extend(tag(&[text_frame("TIT2", "two")], 0));

    let (tags, errors) = run(&bytes);
    assert!(errors.is_empty());
    let titles: Vec<String> = tags.iter().map(|t| t.title().unwrap()).collect();
    assert_eq!(titles, vec!["one", "two"]);
}

#[test]
fn unsupported_version_keeps_scanning() {
    let mut bytes = tag_header(2, 0, 20);
    bytes.extend_from_slice(AUDIO);
    bytes.extend(tag(&[text_frame("TIT2", "Title")], 0));

    let mut stream = Id3Stream::new();
    stream.feed(&bytes[..10]).unwrap();
    assert_eq!(stream.open_tags(), 0);
    match stream.next_event() {
        Some(Event::TagError(Error::Unsupported(Unsupported::Version(2)))) => (),
        other => panic!("unexpected {:?}", other),
    }
    assert!(stream.next_event().is_none());

    stream.feed(&bytes[10..]).unwrap();
    let (tags, errors) = split(stream.drain_events().collect());
    assert!(errors.is_empty());
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].title().unwrap(), "Title");
}

#[test]
fn unsupported_flags_are_reported() {
    let mut bytes = tag_header(3, 0x80, 20);
    bytes.extend(tag_header(3, 0x40, 20));
    let (tags, errors) = run(&bytes);
    assert!(tags.is_empty());
    assert_eq!(errors.len(), 2);
    match (&errors[0], &errors[1]) {
        (
            Error::Unsupported(Unsupported::Unsynchronisation),
            Error::Unsupported(Unsupported::ExtendedHeader),
        ) => (),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn duplicate_frame_does_not_stop_scanner() {
    let mut bytes = tag(&[text_frame("TIT2", "one"), text_frame("TIT2", "two")], 0);
    bytes.extend_from_slice(AUDIO);
    bytes.extend(tag(&[text_frame("TIT2", "three")], 0));

    let (tags, errors) = run(&bytes);
    assert_eq!(errors.len(), 1);
    match errors[0] {
        Error::Unsupported(Unsupported::DuplicateFrame(_)) => (),
        ref other => panic!("unexpected {:?}", other),
    }
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].title().unwrap(), "three");
}

#[test]
fn false_positive_does_not_hide_real_tag() {
    // a header look-alike whose body would swallow the real tag
    let mut bytes = tag_header(3, 0, 1000);
    let real = tag(&[text_frame("TIT2", "Real")], 0);
    bytes.extend_from_slice(&real);

    let mut stream = Id3Stream::new();
    stream.feed(&bytes[..10]).unwrap();
    assert_eq!(stream.open_tags(), 1);
    stream.feed(&bytes[10..19]).unwrap();
    assert_eq!(stream.open_tags(), 1);

    // the tenth byte of the real header breaks the fake frame header and opens a tag
    stream.push_byte(bytes[19]).unwrap();
    assert_eq!(stream.open_tags(), 1);
    match stream.next_event() {
        Some(Event::TagError(Error::NotAHeader(_))) => (),
        other => panic!("unexpected {:?}", other),
    }

    stream.feed(&bytes[20..]).unwrap();
    let (tags, errors) = split(stream.drain_events().collect());
    assert!(errors.is_empty());
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].title().unwrap(), "Real");
}

#[test]
fn candidates_are_independent() {
    // the real tag contains a second header look-alike in a private frame
    let mut fake = tag_header(3, 0, 5);
    fake.extend_from_slice(&[0; 5]);
    let mut bytes = tag(&[frame("PRIV", [0, 0], &fake), text_frame("TIT2", "Outer")], 0);
    bytes.extend_from_slice(AUDIO);

    let (tags, errors) = run(&bytes);
    assert!(errors.is_empty());
    assert_eq!(tags.len(), 2);
    // the inner look-alike completes first, as a padding-only tag
    assert!(tags[0].frames().is_empty());
    assert_eq!(tags[1].title().unwrap(), "Outer");
}

#[test]
fn zero_size_tag() {
    let (tags, errors) = run(&tag_header(3, 0, 0));
    assert!(errors.is_empty());
    assert_eq!(tags.len(), 1);
    assert!(tags[0].is_complete());
}

#[test]
fn end_of_stream() {
    let bytes = tag(&[text_frame("TIT2", "Title")], 0);

    let mut stream = Id3Stream::new();
    stream.feed(&bytes[..bytes.len() - 1]).unwrap();
    assert_eq!(stream.open_tags(), 1);
    assert!(!stream.has_events());

    stream.finish();
    assert_eq!(stream.open_tags(), 0);
    match stream.next_event() {
        Some(Event::TagError(Error::Protocol(Violation::Truncated))) => (),
        other => panic!("unexpected {:?}", other),
    }
    assert!(stream.next_event().is_none());

    // the window was reset, so a header split across the finish is not seen
    let mut stream = Id3Stream::new();
    stream.feed(&bytes[..5]).unwrap();
    stream.finish();
    stream.feed(&bytes[5..]).unwrap();
    assert!(!stream.has_events());
}

proptest! {
    #[test]
    fn never_fails_on_noise(bytes in prop::collection::vec(any::<u8>(), 0..2048)) {
        let mut stream = Id3Stream::new();
        prop_assert!(stream.feed(&bytes).is_ok());
        stream.finish();
        prop_assert_eq!(stream.open_tags(), 0);
    }

    #[test]
    fn finds_tag_at_any_offset(
        before in prop::collection::vec(any::<u8>().prop_map(|b| if b == b'I' { 0 } else { b }), 0..256),
        after in prop::collection::vec(any::<u8>().prop_map(|b| if b == b'I' { 0 } else { b }), 0..256),
        title in "[A-HJ-Za-z0-9 ]{1,32}",
        padding in 0usize..64,
    ) {
        let mut bytes = before;
        bytes.extend(tag(&[text_frame("TIT2", &title)], padding));
        bytes.extend(after);

        let (tags, errors) = run(&bytes);
        prop_assert!(errors.is_empty());
        prop_assert_eq!(tags.len(), 1);
        prop_assert_eq!(tags[0].title().unwrap(), title);
    }
}
