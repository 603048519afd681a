//! Roving keyboard focus across the toolbar's buttons.
//!
//! Exactly one focusable candidate is the sequential tab stop; arrow keys and
//! Home/End move that designation. The controller never looks inside a
//! candidate beyond [`FocusCandidate`], and keeps no state of its own: the
//! active candidate is read back from the tab-stop markings on every call.
//!
//! ```
//! use markbar::focus::{self, FocusCandidate, Navigation};
//!
//! #[derive(Default)]
//! struct Button {
//!     tab_stop: bool,
//! }
//!
//! impl FocusCandidate for Button {
//!     fn is_focusable(&self) -> bool {
//!         true
//!     }
//!     fn is_tab_stop(&self) -> bool {
//!         self.tab_stop
//!     }
//!     fn set_tab_stop(&mut self, tab_stop: bool) {
//!         self.tab_stop = tab_stop;
//!     }
//! }
//!
//! let mut buttons: Vec<Button> = (0..3).map(|_| Button::default()).collect();
//! let current = focus::normalize(&mut buttons).unwrap();
//! assert_eq!(focus::navigate(&mut buttons, current, Navigation::Previous), Some(2));
//! ```

mod roving;

pub use roving::{activate, active, first, last, navigate, next, normalize, previous, Navigation};

/// An element that can hold the toolbar's roving tab stop
pub trait FocusCandidate {
    /// Whether the element takes part in navigation (not hidden or disabled)
    fn is_focusable(&self) -> bool;

    /// Whether the element is currently the sequential tab stop
    fn is_tab_stop(&self) -> bool;

    /// Mark or unmark the element as the tab stop
    fn set_tab_stop(&mut self, tab_stop: bool);
}
