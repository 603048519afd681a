//! Selection as the text field reports it.

/// A field selection with anchor (where it started) and head (where the
/// cursor is), both char offsets into the field value. The head may sit
/// before the anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// The smaller of anchor and head
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// The larger of anchor and head
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }
}
