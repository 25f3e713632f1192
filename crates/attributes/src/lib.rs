#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `attributes` parses, queries, and writes `.gitattributes`-style rule files.
//! Each line pairs a path pattern with a list of attribute tokens; the
//! attributes applying to a path are found by merging every rule whose
//! pattern matches it, in file order.
//!
//! # Design
//!
//! - [`parse_line`] turns one line into a [`Rule`]: a pattern rule, a comment,
//!   or an empty line. Patterns may be double-quoted to contain whitespace.
//! - [`parse_attributes`] interprets the token list into an ordered
//!   [`Attributes`] mapping of [`AttrValue`]s, expanding legacy shorthand
//!   (`binary` also unsets `diff`; `crlf` maps onto `text` and `eol`).
//! - [`AttributeSet`] owns the ordered rules and answers
//!   [`attrs_for_path`](AttributeSet::attrs_for_path) queries through a
//!   [`PatternMatcher`], by default the `globset`-backed [`GlobsetMatcher`].
//! - [`serialize`] and [`AttributeSet::serialize`] rebuild the text, leaving
//!   out entries the legacy shorthand already implies.
//!
//! # Invariants
//!
//! - Rules apply in definition order. For each attribute the last matching
//!   rule that sets it wins; attributes a later rule does not mention keep
//!   their earlier value.
//! - Leading `/` anchors a pattern to the repository root. Patterns without a
//!   leading slash are matched at any depth by implicitly prefixing `**/`.
//! - Parsing never fails. Malformed quoting falls back to a literal pattern
//!   and unknown tokens are treated as set attributes.
//!
//! # Errors
//!
//! Only the file helpers return errors: [`AttributesFileError`] wraps I/O
//! failures. A missing repository or attributes file is reported as
//! `Ok(false)`. [`GlobsetMatcher::validate`] reports [`PatternError`] for
//! globs that do not compile; during queries such globs simply never match.
//!
//! # Examples
//!
//! ```
//! use attributes::{AttrValue, AttributeSet};
//!
//! let mut set = AttributeSet::new();
//! set.parse("*.jpg binary\n/build.sh text eol=lf\n");
//!
//! let jpg = set.attrs_for_path("assets/landscape.jpg");
//! assert_eq!(jpg.get("binary"), Some(&AttrValue::Bool(true)));
//! assert_eq!(jpg.get("diff"), Some(&AttrValue::Bool(false)));
//!
//! assert!(set.attrs_for_path("tools/build.sh").is_empty());
//! assert_eq!(set.serialize(), "*.jpg\tbinary\n/build.sh\ttext eol=lf\n");
//! ```
//!
//! # See also
//!
//! - [`file`] for locating and rewriting a repository's attributes file.
//! - [`globset`] for the glob matching primitives used internally.

pub mod debug_attributes;
mod error;
pub mod file;
mod interpret;
mod legacy;
mod line;
mod map;
mod matcher;
mod options;
mod rule;
mod serialize;
mod set;
mod value;

pub use error::{AttributesFileError, FileAction, PatternError};
pub use file::{
    ATTRIBUTES_FILE_NAME, REPOSITORY_MARKER, find_repository_root, locate_attributes_file,
};
pub use interpret::parse_attributes;
pub use line::parse_line;
pub use map::Attributes;
pub use matcher::{GlobsetMatcher, PatternMatcher};
pub use options::{ParseOptions, SerializeOptions};
pub use rule::Rule;
pub use serialize::{DEFAULT_DELIMITER, serialize, serialize_rule};
pub use set::AttributeSet;
pub use value::AttrValue;
