use crate::serialize::DEFAULT_DELIMITER;

/// Controls which non-pattern lines the parser keeps.
///
/// By default comments and blank lines are dropped. Keeping both lets
/// [`AttributeSet::serialize`](crate::AttributeSet::serialize) write a file
/// back with its comments and spacing in place.
///
/// # Examples
///
/// ```
/// use attributes::ParseOptions;
///
/// let options = ParseOptions::new().with_comments(true);
/// assert!(options.include_comments());
/// assert!(!options.include_empty_lines());
/// assert_eq!(ParseOptions::preserve_all(), ParseOptions::new()
///     .with_comments(true)
///     .with_empty_lines(true));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    include_comments: bool,
    include_empty_lines: bool,
}

impl ParseOptions {
    /// Options that drop comments and blank lines.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_comments: false,
            include_empty_lines: false,
        }
    }

    /// Options that keep comments and blank lines.
    #[must_use]
    pub const fn preserve_all() -> Self {
        Self {
            include_comments: true,
            include_empty_lines: true,
        }
    }

    /// Sets whether `#` comment lines become [`Rule::Comment`](crate::Rule::Comment).
    #[must_use]
    pub const fn with_comments(mut self, include: bool) -> Self {
        self.include_comments = include;
        self
    }

    /// Sets whether blank lines become [`Rule::Empty`](crate::Rule::Empty).
    #[must_use]
    pub const fn with_empty_lines(mut self, include: bool) -> Self {
        self.include_empty_lines = include;
        self
    }

    /// Returns whether comment lines are kept.
    #[must_use]
    pub const fn include_comments(&self) -> bool {
        self.include_comments
    }

    /// Returns whether blank lines are kept.
    #[must_use]
    pub const fn include_empty_lines(&self) -> bool {
        self.include_empty_lines
    }
}

/// Controls how rules are rendered back to text.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SerializeOptions {
    delimiter: String,
}

impl SerializeOptions {
    /// Options using the default tab delimiter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text placed between a pattern and its attribute tokens.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Returns the pattern/attribute delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_owned(),
        }
    }
}
