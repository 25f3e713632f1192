use std::fmt;

use crate::Attributes;
use crate::serialize::{DEFAULT_DELIMITER, render_rule};

/// One parsed line of an attributes file.
///
/// Comment and empty-line rules only exist when the caller asked the parser to
/// keep them, so that a file can be written back with its layout intact.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rule {
    /// A pattern followed by zero or more attribute tokens.
    Pattern {
        /// Pattern text, never empty.
        pattern: String,
        /// Interpreted attributes, including legacy-derived entries.
        attrs: Attributes,
    },
    /// A comment line; holds the text after `#`.
    Comment(String),
    /// A blank line.
    Empty,
}

impl Rule {
    /// Creates a pattern rule.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>, attrs: Attributes) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            attrs,
        }
    }

    /// Creates a comment rule from the text following `#`.
    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// Creates an empty-line rule.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Returns the pattern text of a pattern rule.
    #[must_use]
    pub fn pattern_text(&self) -> Option<&str> {
        match self {
            Self::Pattern { pattern, .. } => Some(pattern),
            Self::Comment(_) | Self::Empty => None,
        }
    }

    /// Returns the attributes of a pattern rule.
    #[must_use]
    pub const fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Pattern { attrs, .. } => Some(attrs),
            Self::Comment(_) | Self::Empty => None,
        }
    }

    /// Returns the comment text of a comment rule.
    #[must_use]
    pub fn comment_text(&self) -> Option<&str> {
        match self {
            Self::Comment(text) => Some(text),
            Self::Pattern { .. } | Self::Empty => None,
        }
    }

    /// Returns `true` for pattern rules.
    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern { .. })
    }

    /// Renders the rule as a single line using `delimiter` between the pattern
    /// and its attribute tokens.
    #[must_use]
    pub fn to_line(&self, delimiter: &str) -> String {
        render_rule(self, delimiter)
    }
}

/// Formats the rule line with the default tab delimiter.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_rule(self, DEFAULT_DELIMITER))
    }
}
