use crate::debug_attributes::{trace_query, trace_rule_added, trace_rule_evaluate};
use crate::serialize::serialize;
use crate::{
    Attributes, GlobsetMatcher, ParseOptions, PatternMatcher, Rule, SerializeOptions, parse_line,
};

/// Ordered collection of attribute rules answering per-path queries.
///
/// Rules keep the order in which they were added; that order is their
/// precedence. Parsing appends to the existing rules, so layered sources are
/// combined by parsing the lower-priority source first:
///
/// ```
/// use attributes::{AttrValue, AttributeSet};
///
/// let mut set = AttributeSet::new();
/// set.parse("*.txt text eol=crlf\n");   // global defaults
/// set.parse("docs/*.txt eol=lf\n");     // repository overrides
///
/// let attrs = set.attrs_for_path("docs/readme.txt");
/// assert_eq!(attrs.get("text"), Some(&AttrValue::Bool(true)));
/// assert_eq!(attrs.get("eol"), Some(&AttrValue::from("lf")));
/// ```
///
/// Path matching is delegated to a [`PatternMatcher`], [`GlobsetMatcher`] by
/// default. Rule patterns starting with `/` are anchored to the repository
/// root; all others match at any depth.
#[derive(Clone, Debug, Default)]
pub struct AttributeSet<M = GlobsetMatcher> {
    rules: Vec<Rule>,
    matcher: M,
}

impl AttributeSet {
    /// Creates an empty set using [`GlobsetMatcher`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: PatternMatcher> AttributeSet<M> {
    /// Creates an empty set matching paths with `matcher`.
    #[must_use]
    pub const fn with_matcher(matcher: M) -> Self {
        Self {
            rules: Vec::new(),
            matcher,
        }
    }

    /// Parses `text`, dropping comments and blank lines, and appends the
    /// resulting rules.
    pub fn parse(&mut self, text: &str) {
        self.parse_with(text, ParseOptions::new());
    }

    /// Parses `text` with explicit options and appends the resulting rules.
    ///
    /// Lines may be separated by `\r\n`, `\r`, or `\n`.
    pub fn parse_with(&mut self, text: &str, options: ParseOptions) {
        for line in split_lines(text) {
            self.read_line(line, options);
        }
    }

    /// Parses a single line and appends its rule, if it produces one.
    pub fn read_line(&mut self, line: &str, options: ParseOptions) {
        if let Some(rule) = parse_line(line, options) {
            self.add_rule(rule);
        }
    }

    /// Appends `rule`, letting the matcher prepare its glob.
    pub fn add_rule(&mut self, rule: Rule) {
        if let Rule::Pattern { pattern, attrs } = &rule {
            self.matcher.prepare(&effective_glob(pattern));
            trace_rule_added(pattern, attrs.len());
        }
        self.rules.push(rule);
    }

    /// Appends every rule yielded by `rules`, in order.
    pub fn add_rules<I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = Rule>,
    {
        for rule in rules {
            self.add_rule(rule);
        }
    }

    /// Replaces all rules with `rules`, returning the previous ones.
    pub fn replace<I>(&mut self, rules: I) -> Vec<Rule>
    where
        I: IntoIterator<Item = Rule>,
    {
        let previous = std::mem::take(&mut self.rules);
        self.add_rules(rules);
        previous
    }

    /// Removes every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Returns the rules in precedence order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules, comments and blank lines included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consumes the set and returns its rules.
    #[must_use]
    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    /// Returns the pattern rules matching `path`, in precedence order.
    ///
    /// `path` is interpreted relative to the repository root; leading `./`
    /// segments are ignored.
    #[must_use]
    pub fn rules_for_path(&self, path: &str) -> Vec<&Rule> {
        let path = normalize_path(path);
        self.rules
            .iter()
            .filter(|rule| match rule {
                Rule::Pattern { pattern, .. } => {
                    let glob = effective_glob(pattern);
                    let matched = self.matcher.matches(&path, &glob);
                    trace_rule_evaluate(&path, &glob, matched);
                    matched
                }
                Rule::Comment(_) | Rule::Empty => false,
            })
            .collect()
    }

    /// Returns the attributes applying to `path`.
    ///
    /// Matching rules are merged in order. Each rule overwrites only the keys
    /// it sets, so a later rule wins per key while keys it does not mention
    /// keep the value from earlier rules.
    #[must_use]
    pub fn attrs_for_path(&self, path: &str) -> Attributes {
        let matched = self.rules_for_path(path);
        let mut merged = Attributes::new();
        for attrs in matched.iter().filter_map(|rule| rule.attributes()) {
            merged.merge_from(attrs);
        }
        trace_query(path, matched.len(), merged.len());
        merged
    }

    /// Renders the rules as attribute-file text using a tab delimiter.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.serialize_with(&SerializeOptions::default())
    }

    /// Renders the rules as attribute-file text.
    #[must_use]
    pub fn serialize_with(&self, options: &SerializeOptions) -> String {
        serialize(&self.rules, options.delimiter())
    }
}

/// Splits on `\r\n`, `\r`, or `\n`. A terminator at the very end does not
/// start another line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(index) => {
                let after = &current[index..];
                let skip = if after.starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[index + skip..]);
                Some(&current[..index])
            }
            None => {
                rest = None;
                (!current.is_empty()).then_some(current)
            }
        }
    })
}

/// Strips leading `./` or `.\` segments and roots the path at `/`. A leading
/// `\` separator is rewritten to `/`, the separator globs are matched against.
pub(crate) fn normalize_path(path: &str) -> String {
    let mut trimmed = path;
    while let Some(rest) = trimmed
        .strip_prefix("./")
        .or_else(|| trimmed.strip_prefix(".\\"))
    {
        trimmed = rest;
    }

    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        let rest = trimmed.strip_prefix('\\').unwrap_or(trimmed);
        format!("/{rest}")
    }
}

/// Anchored patterns are used as-is; others may match at any depth.
pub(crate) fn effective_glob(pattern: &str) -> String {
    if pattern.starts_with('/') {
        pattern.to_owned()
    } else {
        format!("**/{pattern}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttrValue;
    use std::cell::RefCell;

    #[test]
    fn split_lines_accepts_every_separator() {
        let lines: Vec<_> = split_lines("a\r\nb\rc\nd").collect();
        assert_eq!(lines, ["a", "b", "c", "d"]);
    }

    #[test]
    fn split_lines_ignores_final_terminator() {
        let lines: Vec<_> = split_lines("a\n").collect();
        assert_eq!(lines, ["a"]);
        let lines: Vec<_> = split_lines("a\n\n").collect();
        assert_eq!(lines, ["a", ""]);
        let lines: Vec<_> = split_lines("\r\n\r\n").collect();
        assert_eq!(lines, ["", ""]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn normalize_path_roots_relative_paths() {
        assert_eq!(normalize_path("a/b.txt"), "/a/b.txt");
        assert_eq!(normalize_path("/a/b.txt"), "/a/b.txt");
        assert_eq!(normalize_path("././a.txt"), "/a.txt");
        assert_eq!(normalize_path(".\\a.txt"), "/a.txt");
        assert_eq!(normalize_path("./.\\./a.txt"), "/a.txt");
        assert_eq!(normalize_path(".hidden"), "/.hidden");
        assert_eq!(normalize_path("\\a.txt"), "/a.txt");
        assert_eq!(normalize_path(".\\\\a.txt"), "/a.txt");
    }

    #[test]
    fn effective_glob_prefixes_unanchored_patterns() {
        assert_eq!(effective_glob("*.txt"), "**/*.txt");
        assert_eq!(effective_glob("*/sample.txt"), "**/*/sample.txt");
        assert_eq!(effective_glob("/sample.txt"), "/sample.txt");
    }

    #[derive(Default)]
    struct RecordingMatcher {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl PatternMatcher for RecordingMatcher {
        fn matches(&self, path: &str, glob: &str) -> bool {
            self.calls
                .borrow_mut()
                .push((path.to_owned(), glob.to_owned()));
            glob.ends_with("keep")
        }
    }

    #[test]
    fn matcher_receives_normalized_path_and_effective_glob() {
        let mut set = AttributeSet::with_matcher(RecordingMatcher::default());
        set.parse_with("keep text\n# skip\n/drop -text\n", ParseOptions::preserve_all());

        let matched = set.rules_for_path("./src/lib.rs");

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].pattern_text(), Some("keep"));
        let calls = set.matcher.calls.borrow();
        assert_eq!(
            *calls,
            [
                ("/src/lib.rs".to_owned(), "**/keep".to_owned()),
                ("/src/lib.rs".to_owned(), "/drop".to_owned()),
            ]
        );
    }

    #[test]
    fn add_rule_prepares_effective_glob() {
        let mut set = AttributeSet::with_matcher(GlobsetMatcher::new());
        set.parse("*.rs diff=rust\n/build.sh eol=lf\n*.rs text\n");
        assert_eq!(set.matcher.compiled_len(), 2);

        set.attrs_for_path("src/lib.rs");
        set.attrs_for_path("build.sh");
        assert_eq!(set.matcher.compiled_len(), 2);
    }

    #[test]
    fn replace_returns_previous_rules() {
        let mut set = AttributeSet::new();
        set.parse("*.a text\n");
        let previous = set.replace([Rule::pattern("*.b", Attributes::new())]);

        assert_eq!(previous.len(), 1);
        assert_eq!(previous[0].pattern_text(), Some("*.a"));
        assert_eq!(set.rules()[0].pattern_text(), Some("*.b"));
    }

    #[test]
    fn clear_empties_set() {
        let mut set = AttributeSet::new();
        set.parse("*.a text\n*.b binary\n");
        assert_eq!(set.len(), 2);
        set.clear();
        assert!(set.is_empty());
        assert!(set.attrs_for_path("x.a").is_empty());
    }

    #[test]
    fn query_merges_in_rule_order() {
        let mut set = AttributeSet::new();
        set.parse("* text=auto\n*.png binary\n*.png diff=exif\n");

        let attrs = set.attrs_for_path("img/logo.png");
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(
            pairs,
            [
                ("text", &AttrValue::from("auto")),
                ("binary", &AttrValue::Bool(true)),
                ("diff", &AttrValue::from("exif")),
            ]
        );
    }
}
