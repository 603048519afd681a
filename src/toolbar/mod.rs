//! The toolbar controller
//!
//! Owns the text field's [`TextSpan`](crate::editable::TextSpan), the button
//! list and input focus, following the Elm Architecture: the collaborator
//! feeds [`ToolbarMsg`]s into [`update`] and reflects the returned
//! [`ToolbarEvent`].
//!
//! ```
//! use markbar::editable::TextSpan;
//! use markbar::keymap::{default_bindings, Keymap};
//! use markbar::syntax::{Catalogue, Flavor, SyntaxKind};
//! use markbar::toolbar::{update, Toolbar, ToolbarButton, ToolbarEvent, ToolbarMsg};
//!
//! let mut toolbar = Toolbar::new(
//!     vec![ToolbarButton::syntax(SyntaxKind::Bold)],
//!     Catalogue::new(Flavor::Markdown),
//!     Keymap::with_bindings(default_bindings()),
//! );
//! update(&mut toolbar, ToolbarMsg::SetField(TextSpan::from_visual("so |bold|")));
//! assert_eq!(update(&mut toolbar, ToolbarMsg::Click(0)), Some(ToolbarEvent::FieldChanged));
//! assert_eq!(toolbar.field().to_visual(), "so **|bold|**");
//! ```

mod button;
mod messages;
mod model;
mod update;

pub use button::{ButtonKind, ToolbarButton};
pub use messages::{ToolbarEvent, ToolbarMsg};
pub use model::{Focus, Toolbar};
pub use update::update;
