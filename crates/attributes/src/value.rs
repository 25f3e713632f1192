use std::fmt;

/// Value assigned to an attribute by a rule.
///
/// Bare tokens (`binary`) and negated tokens (`-diff`) produce
/// [`Bool`](Self::Bool) values, while `key=value` tokens produce
/// [`Text`](Self::Text). The tag is decided once while parsing and every later
/// stage (merging, suppression of legacy pairs, serialization) matches on it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    /// Attribute explicitly set (`true`) or unset (`false`).
    Bool(bool),
    /// Attribute assigned a textual value, possibly empty.
    Text(String),
}

impl AttrValue {
    /// Returns whether the value counts as set.
    ///
    /// `Bool(b)` is truthy when `b` is `true`; `Text(s)` is truthy when `s` is
    /// non-empty.
    ///
    /// # Examples
    /// ```
    /// use attributes::AttrValue;
    /// assert!(AttrValue::Bool(true).is_truthy());
    /// assert!(AttrValue::from("lf").is_truthy());
    /// assert!(!AttrValue::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(text) => !text.is_empty(),
        }
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the textual payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
