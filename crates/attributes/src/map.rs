use crate::AttrValue;

/// Insertion-ordered mapping from attribute name to [`AttrValue`].
///
/// Setting a key that is already present replaces its value in place, so the
/// key keeps the position of its first insertion. Serialization walks the
/// mapping in this order, which keeps rebuilt rule lines stable. Equality
/// compares contents only and ignores order.
///
/// # Examples
///
/// ```
/// use attributes::{AttrValue, Attributes};
///
/// let mut attrs = Attributes::new();
/// attrs.set("text", AttrValue::Bool(true));
/// attrs.set("eol", AttrValue::from("lf"));
/// attrs.set("text", AttrValue::from("auto"));
///
/// let keys: Vec<_> = attrs.keys().collect();
/// assert_eq!(keys, ["text", "eol"]);
/// assert_eq!(attrs.get("text"), Some(&AttrValue::from("auto")));
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or overwrites `key`.
    pub fn set(&mut self, key: impl Into<String>, value: AttrValue) {
        let key = key.into();
        match self.position(&key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Returns whether `key` has a value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.position(key).map(|index| self.entries.remove(index).1)
    }

    /// Overwrites entries with every pair of `other`, in `other`'s order.
    ///
    /// Keys absent from `other` are left untouched.
    pub fn merge_from(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.set(key, value.clone());
        }
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over attribute names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == key)
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for Attributes {}

impl<K: Into<String>> FromIterator<(K, AttrValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, AttrValue)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

impl IntoIterator for Attributes {
    type Item = (String, AttrValue);
    type IntoIter = std::vec::IntoIter<(String, AttrValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut attrs = Attributes::new();
        attrs.set("binary", AttrValue::Bool(true));
        attrs.set("diff", AttrValue::Bool(false));
        attrs.set("binary", AttrValue::Bool(false));

        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(
            pairs,
            [
                ("binary", &AttrValue::Bool(false)),
                ("diff", &AttrValue::Bool(false)),
            ]
        );
    }

    #[test]
    fn merge_only_touches_keys_present_in_other() {
        let mut base: Attributes = [
            ("text", AttrValue::from("auto")),
            ("eol", AttrValue::from("crlf")),
        ]
        .into_iter()
        .collect();
        let later: Attributes = [("eol", AttrValue::from("lf"))].into_iter().collect();

        base.merge_from(&later);

        assert_eq!(base.get("text"), Some(&AttrValue::from("auto")));
        assert_eq!(base.get("eol"), Some(&AttrValue::from("lf")));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn equality_ignores_order() {
        let forward: Attributes = [
            ("binary", AttrValue::Bool(true)),
            ("diff", AttrValue::Bool(false)),
        ]
        .into_iter()
        .collect();
        let backward: Attributes = [
            ("diff", AttrValue::Bool(false)),
            ("binary", AttrValue::Bool(true)),
        ]
        .into_iter()
        .collect();
        let different: Attributes = [("binary", AttrValue::Bool(true))].into_iter().collect();

        assert_eq!(forward, backward);
        assert_ne!(forward, different);
    }

    #[test]
    fn remove_drops_entry() {
        let mut attrs: Attributes = [("merge", AttrValue::from("union"))].into_iter().collect();
        assert_eq!(attrs.remove("merge"), Some(AttrValue::from("union")));
        assert!(attrs.is_empty());
        assert!(!attrs.contains_key("merge"));
        assert_eq!(attrs.remove("merge"), None);
    }
}
