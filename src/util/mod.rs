//! Utility modules for text handling

pub mod text;

pub use text::{byte_offset, char_len, char_offset, is_url, word_range};
