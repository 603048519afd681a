//! Text field state shared between the toolbar and the syntax engine.
//!
//! - [`TextSpan`]: field value plus forward selection (char offsets), the
//!   unit the syntax engine consumes and produces
//! - [`Selection`]: anchor/head selection as the field tracks it
//!
//! # Example
//!
//! ```
//! use markbar::editable::TextSpan;
//!
//! let span = TextSpan::from_visual("The |quick| brown fox");
//! assert_eq!(span.selected_text(), "quick");
//! assert_eq!(span.to_visual(), "The |quick| brown fox");
//! ```

mod selection;
mod span;

pub use selection::Selection;
pub use span::{SpanError, TextSpan, SELECTION_MARKER};
