use crate::id3v2::validator::TAG_HEADER_LENGTH;

/// The last [`TAG_HEADER_LENGTH`] bytes of the stream.
///
/// Bytes are never moved: once the buffer is full each new byte overwrites the oldest
/// slot and `start` advances, so the logical window begins at physical index `start`
/// and wraps around the end.
#[derive(Debug, Clone, Default)]
pub struct HeaderWindow {
    data: [u8; TAG_HEADER_LENGTH],
    len: usize,
    start: usize,
}

impl HeaderWindow {
    pub fn new() -> HeaderWindow {
        Default::default()
    }

    pub fn insert(&mut self, byte: u8) {
        if self.len < TAG_HEADER_LENGTH {
            self.data[self.len] = byte;
            self.len += 1;
        } else {
            self.data[self.start] = byte;
            self.start = (self.start + 1) % TAG_HEADER_LENGTH;
        }
    }

    pub fn is_full(&self) -> bool {
        self.len == TAG_HEADER_LENGTH
    }

    /// The physical buffer and the index of its oldest byte, once it is full.
    pub fn window(&self) -> Option<(&[u8; TAG_HEADER_LENGTH], usize)> {
        if self.is_full() {
            Some((&self.data, self.start))
        } else {
            None
        }
    }

    /// The buffered bytes, oldest first.
    pub fn ordered(&self) -> Vec<u8> {
        (0..self.len)
            .map(|i| self.data[(self.start + i) % TAG_HEADER_LENGTH])
            .collect()
    }

    pub fn clear(&mut self) {
        *self = HeaderWindow::new();
    }
}
