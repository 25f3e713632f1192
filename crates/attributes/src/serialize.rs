//! Rendering rules back into attribute-file text.
//!
//! Rule lines are rebuilt from the interpreted mapping rather than kept
//! verbatim. Entries that the legacy shorthand table derives from another
//! entry on the same rule (`diff` after `binary`, `text`/`eol` after `crlf`)
//! are left out, so re-parsing the output derives them again. Entries that
//! override such a derivation are written after every other token, sorted by
//! key, so the re-parsed trigger cannot clobber them.

use crate::legacy::{active_derivation, is_implied};
use crate::{AttrValue, Attributes, Rule};

/// Delimiter placed between a pattern and its attribute tokens by default.
pub const DEFAULT_DELIMITER: &str = "\t";

/// Serializes a single rule, passing `None` through.
///
/// # Examples
///
/// ```
/// use attributes::{Rule, parse_attributes, serialize_rule};
///
/// let rule = Rule::pattern("*.png", parse_attributes("binary"));
/// assert_eq!(serialize_rule(Some(&rule), " ").as_deref(), Some("*.png binary"));
/// assert_eq!(serialize_rule(None, "\t"), None);
/// ```
#[must_use]
pub fn serialize_rule(rule: Option<&Rule>, delimiter: &str) -> Option<String> {
    rule.map(|rule| render_rule(rule, delimiter))
}

/// Serializes a rule sequence into attribute-file text.
///
/// Lines are joined with `\n` and the result always ends with a trailing
/// `\n`, so an empty sequence renders as a single newline.
#[must_use]
pub fn serialize<'a, I>(rules: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = &'a Rule>,
{
    let mut output = String::new();
    for rule in rules {
        output.push_str(&render_rule(rule, delimiter));
        output.push('\n');
    }
    if output.is_empty() {
        output.push('\n');
    }
    output
}

pub(crate) fn render_rule(rule: &Rule, delimiter: &str) -> String {
    match rule {
        Rule::Empty => String::new(),
        Rule::Comment(text) => format!("#{text}"),
        Rule::Pattern { pattern, attrs } => {
            let mut line = quote_pattern(pattern);
            let tokens = attribute_tokens(attrs);
            if !tokens.is_empty() {
                line.push_str(delimiter);
                line.push_str(&tokens);
            }
            line
        }
    }
}

/// Wraps `pattern` in double quotes when it contains whitespace or would
/// otherwise be read back differently: a leading `"` would start a quoted
/// pattern and a leading `\#` would lose its backslash. A bare pattern
/// starting with `#` is escaped so it is not read back as a comment.
fn quote_pattern(pattern: &str) -> String {
    let needs_quotes = pattern.starts_with('"')
        || pattern.starts_with("\\#")
        || pattern.chars().any(char::is_whitespace);
    if !needs_quotes {
        return if pattern.starts_with('#') {
            format!("\\{pattern}")
        } else {
            pattern.to_owned()
        };
    }

    let mut quoted = String::with_capacity(pattern.len() + 2);
    quoted.push('"');
    for ch in pattern.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\t' => quoted.push_str("\\t"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

fn attribute_tokens(attrs: &Attributes) -> String {
    let mut tokens = Vec::with_capacity(attrs.len());
    let mut overrides = Vec::new();
    for (key, value) in attrs.iter() {
        if is_implied(attrs, key, value) {
            continue;
        }
        let token = match value {
            AttrValue::Bool(true) => key.to_owned(),
            AttrValue::Bool(false) => format!("-{key}"),
            AttrValue::Text(text) => format!("{key}={text}"),
        };
        if active_derivation(attrs, key).is_some() {
            overrides.push((key, token));
        } else {
            tokens.push(token);
        }
    }
    overrides.sort_by(|(left, _), (right, _)| left.cmp(right));
    tokens.extend(overrides.into_iter().map(|(_, token)| token));
    tokens.join(" ")
}
