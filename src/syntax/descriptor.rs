//! Syntax descriptors: the tokens and flags the toggle engine applies.

use std::fmt;

/// Which group of line markers a line syntax belongs to.
///
/// Applying a line syntax replaces an existing marker of the same family
/// (e.g. `## ` becomes `# `, `- ` becomes `1. `) instead of stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineFamily {
    Header,
    List,
    Quote,
}

/// Static description of one formatting syntax.
///
/// Built through the constructors and builder methods below; the syntax
/// engine never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxDescriptor {
    pub(crate) prefix: String,
    pub(crate) suffix: String,
    pub(crate) multiline_prefix: String,
    pub(crate) multiline_suffix: String,
    pub(crate) block_prefix: String,
    pub(crate) line_family: Option<LineFamily>,
    pub(crate) trim_first: bool,
    pub(crate) ordered_list: bool,
    pub(crate) surround_with_newlines: bool,
    pub(crate) prefix_space: bool,
    pub(crate) placeholder: Option<String>,
}

impl SyntaxDescriptor {
    /// Inline syntax wrapping the selection in `prefix`/`suffix`
    pub fn inline(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            ..Self::default()
        }
    }

    /// Line syntax applying `prefix` at the start of every affected line
    pub fn line(prefix: impl Into<String>, family: LineFamily) -> Self {
        Self {
            block_prefix: prefix.into(),
            line_family: Some(family),
            ..Self::default()
        }
    }

    /// Numbered list (`1. `, `2. `, ...) applied per line
    pub fn ordered_list() -> Self {
        Self {
            ordered_list: true,
            line_family: Some(LineFamily::List),
            ..Self::default()
        }
    }

    /// Fence used instead of the inline tokens when the text spans lines
    pub fn with_multiline(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.multiline_prefix = prefix.into();
        self.multiline_suffix = suffix.into();
        self
    }

    /// Keep leading/trailing selected whitespace outside the tokens
    pub fn trim_first(mut self) -> Self {
        self.trim_first = true;
        self
    }

    /// Pad the inserted syntax with blank lines from surrounding text
    pub fn surround_with_newlines(mut self) -> Self {
        self.surround_with_newlines = true;
        self
    }

    /// Separate the prefix from a preceding word with a space
    pub fn prefix_space(mut self) -> Self {
        self.prefix_space = true;
        self
    }

    /// Placeholder inside the suffix that gets selected for plain text, or
    /// replaced by the selection when the selection looks like a URL
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn block_prefix(&self) -> &str {
        &self.block_prefix
    }

    /// Whether this is a line syntax (header, quote, list)
    pub fn is_line_syntax(&self) -> bool {
        self.ordered_list || !self.block_prefix.is_empty()
    }

    pub(crate) fn has_multiline_form(&self) -> bool {
        !self.multiline_prefix.is_empty() || !self.multiline_suffix.is_empty()
    }

    /// Placeholder, only when the suffix actually contains it
    pub(crate) fn active_placeholder(&self) -> Option<&str> {
        self.placeholder
            .as_deref()
            .filter(|placeholder| !placeholder.is_empty() && self.suffix.contains(placeholder))
    }

    /// Check that the descriptor carries tokens the engine can apply
    pub fn validate(&self) -> Result<(), SyntaxError> {
        if self.prefix.is_empty() && self.suffix.is_empty() && !self.is_line_syntax() {
            return Err(SyntaxError::NoTokens);
        }
        if self.is_line_syntax() && (!self.prefix.is_empty() || !self.suffix.is_empty()) {
            return Err(SyntaxError::MixedForms);
        }
        Ok(())
    }
}

/// Malformed descriptors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Neither inline nor line tokens
    NoTokens,
    /// Both inline tokens and a line prefix
    MixedForms,
    /// Name that is not in the catalogue
    UnknownSyntax(String),
    /// Flavor name that is not recognised
    UnknownFlavor(String),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::NoTokens => write!(f, "Syntax has neither inline nor line tokens"),
            SyntaxError::MixedForms => {
                write!(f, "Syntax mixes inline tokens with a line prefix")
            }
            SyntaxError::UnknownSyntax(name) => write!(f, "Unknown syntax: {}", name),
            SyntaxError::UnknownFlavor(name) => write!(f, "Unknown flavor: {}", name),
        }
    }
}

impl std::error::Error for SyntaxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_is_valid() {
        assert_eq!(SyntaxDescriptor::inline("**", "**").validate(), Ok(()));
        assert!(!SyntaxDescriptor::inline("**", "**").is_line_syntax());
    }

    #[test]
    fn test_empty_descriptor_is_rejected() {
        assert_eq!(
            SyntaxDescriptor::default().validate(),
            Err(SyntaxError::NoTokens)
        );
    }

    #[test]
    fn test_ordered_list_is_line_syntax() {
        let list = SyntaxDescriptor::ordered_list();
        assert!(list.is_line_syntax());
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn test_placeholder_must_appear_in_suffix() {
        let link = SyntaxDescriptor::inline("[", "](url)").with_placeholder("url");
        assert_eq!(link.active_placeholder(), Some("url"));

        let odd = SyntaxDescriptor::inline("[", "]").with_placeholder("url");
        assert_eq!(odd.active_placeholder(), None);
    }
}
