use crate::debug_attributes::trace_quoted_pattern_fallback;
use crate::{ParseOptions, Rule, parse_attributes};

/// Parses one physical line of an attributes file.
///
/// Returns `None` for lines that produce no rule: blank lines and comments
/// unless `options` asks to keep them, and quoted patterns that decode to an
/// empty string.
///
/// The first field is the pattern, either a bare word or a double-quoted
/// string in which `\"`, `\\`, `\t`, `\n` and `\r` are escapes. A leading `\#`
/// yields a pattern starting with a literal `#`. Everything after the pattern
/// is handed to [`parse_attributes`].
///
/// Malformed quoting never fails the line:
///
/// - without a closing quote, the line is split at the first whitespace like
///   an unquoted line, so the raw token (opening quote included) becomes the
///   pattern;
/// - with a closing quote but an unknown escape, the raw text from the opening
///   quote through the closing quote is used as the pattern.
///
/// # Examples
///
/// ```
/// use attributes::{AttrValue, ParseOptions, Rule, parse_line};
///
/// let rule = parse_line("\"My Documents/*.doc\" -text", ParseOptions::new()).unwrap();
/// assert_eq!(rule.pattern_text(), Some("My Documents/*.doc"));
/// assert_eq!(
///     rule.attributes().and_then(|attrs| attrs.get("text")),
///     Some(&AttrValue::Bool(false))
/// );
///
/// assert_eq!(parse_line("# comment", ParseOptions::new()), None);
/// assert_eq!(
///     parse_line("# comment", ParseOptions::new().with_comments(true)),
///     Some(Rule::comment(" comment"))
/// );
/// ```
#[must_use]
pub fn parse_line(raw: &str, options: ParseOptions) -> Option<Rule> {
    let line = raw.trim();

    if line.is_empty() {
        return options.include_empty_lines().then_some(Rule::Empty);
    }

    if let Some(comment) = line.strip_prefix('#') {
        return options
            .include_comments()
            .then(|| Rule::Comment(comment.to_owned()));
    }

    let line = line
        .strip_prefix('\\')
        .filter(|rest| rest.starts_with('#'))
        .unwrap_or(line);

    let (pattern, tokens) = if line.starts_with('"') {
        split_quoted(line)
    } else {
        split_bare(line)
    };

    if pattern.is_empty() {
        trace_quoted_pattern_fallback(line, "empty pattern");
        return None;
    }

    Some(Rule::Pattern {
        pattern,
        attrs: parse_attributes(tokens),
    })
}

/// Splits `line` at its first whitespace run.
fn split_bare(line: &str) -> (String, &str) {
    match line.split_once(char::is_whitespace) {
        Some((pattern, rest)) => (pattern.to_owned(), rest.trim_start()),
        None => (line.to_owned(), ""),
    }
}

fn split_quoted(line: &str) -> (String, &str) {
    let Some(end) = closing_quote(line) else {
        trace_quoted_pattern_fallback(line, "unterminated quote");
        return split_bare(line);
    };

    let raw = &line[..=end];
    let rest = line[end + 1..].trim();
    match unquote(&line[1..end]) {
        Some(pattern) => (pattern, rest),
        None => {
            trace_quoted_pattern_fallback(raw, "invalid escape");
            (raw.to_owned(), rest)
        }
    }
}

/// Returns the byte index of the quote closing the string opened at index 0.
fn closing_quote(line: &str) -> Option<usize> {
    let mut chars = line.char_indices().skip(1);
    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '"' => return Some(index),
            _ => {}
        }
    }
    None
}

fn unquote(body: &str) -> Option<String> {
    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }
        decoded.push(match chars.next()? {
            '"' => '"',
            '\\' => '\\',
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            _ => return None,
        });
    }
    Some(decoded)
}
