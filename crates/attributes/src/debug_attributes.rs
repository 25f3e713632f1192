//! Structured tracing for attribute rule parsing and path evaluation.
//!
//! Every function emits a `tracing` event when the `tracing` feature is
//! enabled and compiles to an inline no-op otherwise, so callers never need
//! their own `cfg` guards.
//!
//! # Examples
//!
//! ```rust,ignore
//! use attributes::debug_attributes::{trace_rule_added, trace_query};
//!
//! trace_rule_added("*.png", 2);
//! trace_query("/assets/logo.png", 1, 2);
//! ```

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const ATTRIBUTES_TARGET: &str = "attributes::rules";

// ============================================================================
// Parsing
// ============================================================================

/// Traces a pattern rule being appended to an attribute set.
///
/// # Arguments
///
/// * `pattern` - The rule pattern (e.g., "*.png", "/docs/**")
/// * `attr_count` - Number of attributes the rule sets, derived ones included
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_added(pattern: &str, attr_count: usize) {
    tracing::debug!(
        target: ATTRIBUTES_TARGET,
        pattern = %pattern,
        attr_count = attr_count,
        "rule_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_added(_pattern: &str, _attr_count: usize) {}

/// Traces a quoted pattern that could not be decoded and was kept literally.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_quoted_pattern_fallback(raw: &str, reason: &str) {
    tracing::debug!(
        target: ATTRIBUTES_TARGET,
        raw = %raw,
        reason = %reason,
        "quoted_pattern_fallback"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_quoted_pattern_fallback(_raw: &str, _reason: &str) {}

// ============================================================================
// Matching
// ============================================================================

/// Traces a glob that failed to compile and therefore never matches.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_invalid_glob(glob: &str, error: &dyn std::error::Error) {
    tracing::warn!(
        target: ATTRIBUTES_TARGET,
        glob = %glob,
        error = %error,
        "invalid_glob"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_invalid_glob(_glob: &str, _error: &dyn std::error::Error) {}

/// Traces evaluation of a normalized path against one rule's effective glob.
///
/// # Arguments
///
/// * `path` - Normalized path being queried (e.g., "/src/main.rs")
/// * `glob` - Effective glob built from the rule pattern
/// * `matched` - Whether the glob matched the path
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_evaluate(path: &str, glob: &str, matched: bool) {
    tracing::trace!(
        target: ATTRIBUTES_TARGET,
        path = %path,
        glob = %glob,
        matched = matched,
        "rule_evaluate"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_evaluate(_path: &str, _glob: &str, _matched: bool) {}

/// Traces the merged outcome of an attribute query.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_query(path: &str, matched_rules: usize, attr_count: usize) {
    tracing::debug!(
        target: ATTRIBUTES_TARGET,
        path = %path,
        matched_rules = matched_rules,
        attr_count = attr_count,
        "attributes_query"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_query(_path: &str, _matched_rules: usize, _attr_count: usize) {}

// ============================================================================
// Files
// ============================================================================

/// Traces an attributes file being parsed into a set.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_file_loaded(path: &std::path::Path, rule_count: usize) {
    tracing::debug!(
        target: ATTRIBUTES_TARGET,
        path = %path.display(),
        rule_count = rule_count,
        "attributes_file_loaded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_file_loaded(_path: &std::path::Path, _rule_count: usize) {}

/// Traces an attributes file being written.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_file_written(path: &std::path::Path, bytes: usize) {
    tracing::debug!(
        target: ATTRIBUTES_TARGET,
        path = %path.display(),
        bytes = bytes,
        "attributes_file_written"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_file_written(_path: &std::path::Path, _bytes: usize) {}
