//! The closed set of toolbar syntaxes and their tokens per flavor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::descriptor::{LineFamily, SyntaxDescriptor, SyntaxError};

/// Header level used when a header button does not name one
pub const DEFAULT_HEADER_LEVEL: u8 = 3;

/// Every syntax a toolbar button or hotkey can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// `#` through `######`; levels outside 1..=6 resolve to nothing
    Header { level: u8 },
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Quote,
    Code,
    Link,
    Image,
    UnorderedList,
    OrderedList,
    TaskList,
    Mention,
    Ref,
}

impl SyntaxKind {
    /// Every kind with its canonical name, headers at the default level
    pub const ALL: [SyntaxKind; 14] = [
        SyntaxKind::Header {
            level: DEFAULT_HEADER_LEVEL,
        },
        SyntaxKind::Bold,
        SyntaxKind::Italic,
        SyntaxKind::Underline,
        SyntaxKind::Strikethrough,
        SyntaxKind::Quote,
        SyntaxKind::Code,
        SyntaxKind::Link,
        SyntaxKind::Image,
        SyntaxKind::UnorderedList,
        SyntaxKind::OrderedList,
        SyntaxKind::TaskList,
        SyntaxKind::Mention,
        SyntaxKind::Ref,
    ];

    /// Build a kind from its name plus an optional header level
    pub fn from_name(name: &str, level: Option<u8>) -> Result<Self, SyntaxError> {
        let kind = match name.to_lowercase().as_str() {
            "header" | "heading" => SyntaxKind::Header {
                level: level.unwrap_or(DEFAULT_HEADER_LEVEL),
            },
            "bold" => SyntaxKind::Bold,
            "italic" => SyntaxKind::Italic,
            "underline" => SyntaxKind::Underline,
            "strikethrough" | "strike" => SyntaxKind::Strikethrough,
            "quote" => SyntaxKind::Quote,
            "code" => SyntaxKind::Code,
            "link" => SyntaxKind::Link,
            "image" => SyntaxKind::Image,
            "unordered-list" | "unordered_list" | "ul" => SyntaxKind::UnorderedList,
            "ordered-list" | "ordered_list" | "ol" => SyntaxKind::OrderedList,
            "task-list" | "task_list" => SyntaxKind::TaskList,
            "mention" => SyntaxKind::Mention,
            "ref" | "reference" => SyntaxKind::Ref,
            other => {
                // h1 .. h6 shorthand
                let level = other
                    .strip_prefix('h')
                    .and_then(|digits| digits.parse::<u8>().ok())
                    .ok_or_else(|| SyntaxError::UnknownSyntax(name.to_string()))?;
                SyntaxKind::Header { level }
            }
        };
        Ok(kind)
    }

    /// Canonical name, as accepted by [`SyntaxKind::from_name`]
    pub fn name(self) -> &'static str {
        match self {
            SyntaxKind::Header { .. } => "header",
            SyntaxKind::Bold => "bold",
            SyntaxKind::Italic => "italic",
            SyntaxKind::Underline => "underline",
            SyntaxKind::Strikethrough => "strikethrough",
            SyntaxKind::Quote => "quote",
            SyntaxKind::Code => "code",
            SyntaxKind::Link => "link",
            SyntaxKind::Image => "image",
            SyntaxKind::UnorderedList => "unordered-list",
            SyntaxKind::OrderedList => "ordered-list",
            SyntaxKind::TaskList => "task-list",
            SyntaxKind::Mention => "mention",
            SyntaxKind::Ref => "ref",
        }
    }
}

impl FromStr for SyntaxKind {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s, None)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxKind::Header { level } => write!(f, "h{}", level),
            other => f.write_str(other.name()),
        }
    }
}

/// Token set for the emphasis syntaxes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    /// `**bold**`, `_italic_`, `~~strike~~`
    #[default]
    Markdown,
    /// `<b>bold</b>`, `<i>italic</i>`, `<s>strike</s>`
    Html,
}

impl FromStr for Flavor {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Flavor::Markdown),
            "html" => Ok(Flavor::Html),
            other => Err(SyntaxError::UnknownFlavor(other.to_string())),
        }
    }
}

/// Resolves [`SyntaxKind`]s to descriptors for one flavor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Catalogue {
    flavor: Flavor,
}

impl Catalogue {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Descriptor for `kind`, or `None` for a header level outside 1..=6
    pub fn resolve(&self, kind: SyntaxKind) -> Option<SyntaxDescriptor> {
        let html = self.flavor == Flavor::Html;

        let descriptor = match kind {
            SyntaxKind::Header { level } => {
                if !(1..=6).contains(&level) {
                    return None;
                }
                let prefix = format!("{} ", "#".repeat(level as usize));
                SyntaxDescriptor::line(prefix, LineFamily::Header)
            }
            SyntaxKind::Bold if html => SyntaxDescriptor::inline("<b>", "</b>").trim_first(),
            SyntaxKind::Bold => SyntaxDescriptor::inline("**", "**").trim_first(),
            SyntaxKind::Italic if html => SyntaxDescriptor::inline("<i>", "</i>").trim_first(),
            SyntaxKind::Italic => SyntaxDescriptor::inline("_", "_").trim_first(),
            SyntaxKind::Underline if html => SyntaxDescriptor::inline("<u>", "</u>").trim_first(),
            SyntaxKind::Underline => SyntaxDescriptor::inline("<ins>", "</ins>").trim_first(),
            SyntaxKind::Strikethrough if html => {
                SyntaxDescriptor::inline("<s>", "</s>").trim_first()
            }
            SyntaxKind::Strikethrough => SyntaxDescriptor::inline("~~", "~~").trim_first(),
            SyntaxKind::Quote => {
                SyntaxDescriptor::line("> ", LineFamily::Quote).surround_with_newlines()
            }
            SyntaxKind::Code => SyntaxDescriptor::inline("`", "`").with_multiline("```", "```"),
            SyntaxKind::Link => SyntaxDescriptor::inline("[", "](url)").with_placeholder("url"),
            SyntaxKind::Image => SyntaxDescriptor::inline("![", "](url)").with_placeholder("url"),
            SyntaxKind::UnorderedList => {
                SyntaxDescriptor::line("- ", LineFamily::List).surround_with_newlines()
            }
            SyntaxKind::OrderedList => SyntaxDescriptor::ordered_list().surround_with_newlines(),
            SyntaxKind::TaskList => {
                SyntaxDescriptor::line("- [ ] ", LineFamily::List).surround_with_newlines()
            }
            SyntaxKind::Mention => SyntaxDescriptor::inline("@", "").prefix_space(),
            SyntaxKind::Ref => SyntaxDescriptor::inline("#", "").prefix_space(),
        };

        Some(descriptor)
    }
}
