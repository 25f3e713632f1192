use crate::legacy::apply_derivations;
use crate::{AttrValue, Attributes};

/// Interprets the attribute portion of a rule line.
///
/// The token string is split on whitespace and folded left to right into an
/// [`Attributes`] mapping, so later tokens overwrite earlier ones:
///
/// - `-name` unsets `name` (`Bool(false)`),
/// - `name=value` assigns `Text(value)` (split at the first `=`),
/// - a bare `name` sets it (`Bool(true)`),
/// - a lone `=` is ignored.
///
/// After each token the legacy shorthand table is applied, so `binary` also
/// yields `diff = false`, and `crlf` yields the matching `text` or `eol` entry.
///
/// # Examples
///
/// ```
/// use attributes::{AttrValue, parse_attributes};
///
/// let attrs = parse_attributes("binary merge=union");
/// assert_eq!(attrs.get("binary"), Some(&AttrValue::Bool(true)));
/// assert_eq!(attrs.get("diff"), Some(&AttrValue::Bool(false)));
/// assert_eq!(attrs.get("merge"), Some(&AttrValue::from("union")));
/// ```
#[must_use]
pub fn parse_attributes(tokens: &str) -> Attributes {
    let mut attrs = Attributes::new();

    for piece in tokens.split_whitespace() {
        let Some((key, value)) = interpret_token(piece) else {
            continue;
        };
        attrs.set(key, value.clone());
        apply_derivations(&mut attrs, key, &value);
    }

    attrs
}

fn interpret_token(piece: &str) -> Option<(&str, AttrValue)> {
    if piece == "=" {
        return None;
    }
    if let Some(name) = piece.strip_prefix('-') {
        return Some((name, AttrValue::Bool(false)));
    }
    if let Some((name, value)) = piece.split_once('=') {
        return Some((name, AttrValue::Text(value.to_owned())));
    }
    Some((piece, AttrValue::Bool(true)))
}
