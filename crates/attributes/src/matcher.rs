use std::sync::{Mutex, MutexGuard, PoisonError};

use globset::{GlobBuilder, GlobMatcher};
use rustc_hash::FxHashMap;

use crate::PatternError;
use crate::debug_attributes::trace_invalid_glob;

/// Decides whether a normalized repository path matches a glob.
///
/// Implementations must follow shell-glob semantics where `*` matches any run
/// of characters except `/`, `**` also crosses directory boundaries, and the
/// glob must match the whole path string. Paths are handed over in their
/// normalized form (leading `/`, repository-root relative).
pub trait PatternMatcher {
    /// Returns `true` when `path` matches `glob`.
    fn matches(&self, path: &str, glob: &str) -> bool;

    /// Called once for each glob when its rule is added, before any query.
    ///
    /// Matchers that compile globs can do so here. The default does nothing.
    fn prepare(&self, _glob: &str) {}
}

impl<M: PatternMatcher + ?Sized> PatternMatcher for &M {
    fn matches(&self, path: &str, glob: &str) -> bool {
        (**self).matches(path, glob)
    }

    fn prepare(&self, glob: &str) {
        (**self).prepare(glob);
    }
}

/// [`PatternMatcher`] backed by [`globset`].
///
/// Globs are built with a literal path separator, so `*` stops at `/`, and
/// with backslash escapes enabled, so `\*` matches a literal asterisk. Each
/// distinct glob is compiled once and kept for later queries. A glob that
/// fails to compile never matches.
///
/// # Examples
///
/// ```
/// use attributes::{GlobsetMatcher, PatternMatcher};
///
/// let matcher = GlobsetMatcher::new();
/// assert!(matcher.matches("/path/sample.txt", "**/*/sample.txt"));
/// assert!(!matcher.matches("/a/b/sample.txt", "/*/sample.txt"));
/// assert_eq!(matcher.compiled_len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GlobsetMatcher {
    // `None` records a glob that failed to compile.
    compiled: Mutex<FxHashMap<String, Option<GlobMatcher>>>,
}

impl GlobsetMatcher {
    /// Creates a matcher with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that `glob` compiles with the settings used for matching.
    pub fn validate(glob: &str) -> Result<(), PatternError> {
        compile(glob).map(|_| ())
    }

    /// Returns the number of distinct globs compiled so far, failed ones
    /// included.
    #[must_use]
    pub fn compiled_len(&self) -> usize {
        self.cache().len()
    }

    fn cache(&self) -> MutexGuard<'_, FxHashMap<String, Option<GlobMatcher>>> {
        self.compiled.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_compiled<R>(&self, glob: &str, f: impl FnOnce(Option<&GlobMatcher>) -> R) -> R {
        let mut cache = self.cache();
        if !cache.contains_key(glob) {
            let compiled = match compile(glob) {
                Ok(matcher) => Some(matcher),
                Err(error) => {
                    trace_invalid_glob(glob, &error);
                    None
                }
            };
            cache.insert(glob.to_owned(), compiled);
        }
        f(cache.get(glob).and_then(Option::as_ref))
    }
}

impl Clone for GlobsetMatcher {
    fn clone(&self) -> Self {
        Self {
            compiled: Mutex::new(self.cache().clone()),
        }
    }
}

impl PatternMatcher for GlobsetMatcher {
    fn matches(&self, path: &str, glob: &str) -> bool {
        self.with_compiled(glob, |matcher| {
            matcher.is_some_and(|matcher| matcher.is_match(path))
        })
    }

    fn prepare(&self, glob: &str) {
        self.with_compiled(glob, |_| ());
    }
}

fn compile(glob: &str) -> Result<GlobMatcher, PatternError> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|error| PatternError::new(glob.to_owned(), error))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(path: &str, glob: &str) -> bool {
        GlobsetMatcher::new().matches(path, glob)
    }

    #[test]
    fn single_star_stays_within_segment() {
        assert!(matches("/readme.txt", "/*.txt"));
        assert!(!matches("/docs/readme.txt", "/*.txt"));
    }

    #[test]
    fn double_star_crosses_segments() {
        assert!(matches("/readme.txt", "**/*.txt"));
        assert!(matches("/a/b/c/readme.txt", "**/*.txt"));
        assert!(matches("/a/b/c/readme.txt", "/a/**/readme.txt"));
    }

    #[test]
    fn whole_path_must_match() {
        assert!(!matches("/readme.txt.bak", "**/*.txt"));
        assert!(!matches("/notes/readme.txt", "/readme.txt"));
    }

    #[test]
    fn repeated_recursive_prefix_is_accepted() {
        assert!(matches("/sample.txt", "**/**/sample.txt"));
        assert!(matches("/deep/dir/sample.txt", "**/**/sample.txt"));
    }

    #[test]
    fn escaped_metacharacters_are_literal() {
        assert!(matches("/a*b", "/a\\*b"));
        assert!(!matches("/axb", "/a\\*b"));
    }

    #[test]
    fn invalid_glob_never_matches() {
        assert!(!matches("/[", "**/["));
        let error = GlobsetMatcher::validate("[").unwrap_err();
        assert_eq!(error.pattern(), "[");
        assert!(GlobsetMatcher::validate("**/*.rs").is_ok());
    }

    #[test]
    fn each_glob_is_compiled_once() {
        let matcher = GlobsetMatcher::new();
        for path in ["/a.rs", "/src/b.rs", "/c.txt"] {
            matcher.matches(path, "**/*.rs");
            matcher.matches(path, "**/[");
        }
        assert_eq!(matcher.compiled_len(), 2);

        matcher.prepare("**/*.rs");
        matcher.prepare("/docs/**");
        assert_eq!(matcher.compiled_len(), 3);
    }

    #[test]
    fn clone_keeps_compiled_globs() {
        let matcher = GlobsetMatcher::new();
        matcher.prepare("**/*.md");
        let copy = matcher.clone();
        assert_eq!(copy.compiled_len(), 1);
        assert!(copy.matches("/README.md", "**/*.md"));
    }

    #[test]
    fn references_delegate() {
        fn check<M: PatternMatcher>(matcher: M) -> bool {
            matcher.matches("/x.rs", "**/*.rs")
        }

        let matcher = GlobsetMatcher::new();
        assert!(check(&matcher));
    }
}
