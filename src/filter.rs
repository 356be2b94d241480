//! Mount eligibility: fs-type sets plus user include/exclude patterns.

use crate::error::{CollectError, Result};
use glob::{MatchOptions, Pattern};
use regex::Regex;
use std::collections::HashSet;

/// `*` stays inside one path component; `**` crosses them.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive:              true,
    require_literal_separator:   true,
    require_literal_leading_dot: false,
};

/// A single path or volume pattern.
///
/// `regex:<re>` matches the whole string against a regular expression;
/// `glob:<pat>` or a bare pattern is a shell-style glob.
#[derive(Debug, Clone)]
pub enum PathMatcher {
    Glob(Pattern),
    Regex(Regex),
}

impl PathMatcher {
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |reason: String| CollectError::Pattern { pattern: spec.to_string(), reason };

        if let Some(re) = spec.strip_prefix("regex:") {
            let anchored = format!("^(?:{})$", re);
            return Regex::new(&anchored)
                .map(PathMatcher::Regex)
                .map_err(|e| invalid(e.to_string()));
        }
        let pat = spec.strip_prefix("glob:").unwrap_or(spec);
        Pattern::new(pat)
            .map(PathMatcher::Glob)
            .map_err(|e| invalid(e.to_string()))
    }

    pub fn matches(&self, s: &str) -> bool {
        match self {
            PathMatcher::Glob(p)  => p.matches_with(s, GLOB_OPTIONS),
            PathMatcher::Regex(r) => r.is_match(s),
        }
    }
}

fn any_match(matchers: &[PathMatcher], s: &str) -> bool {
    matchers.iter().any(|m| m.matches(s))
}

/// Immutable filtering rules, built once from configuration.
#[derive(Debug, Clone, Default)]
pub struct FilterPolicy {
    pub path_includes:    Vec<PathMatcher>,
    pub path_excludes:    Vec<PathMatcher>,
    pub volume_includes:  Vec<PathMatcher>,
    pub volume_excludes:  Vec<PathMatcher>,
    pub pseudo_fs_types:  HashSet<String>,
    pub network_fs_types: HashSet<String>,
}

impl FilterPolicy {
    pub fn is_network(&self, fs_type: &str) -> bool {
        self.network_fs_types.contains(fs_type)
    }

    pub fn is_pseudo(&self, fs_type: &str) -> bool {
        self.pseudo_fs_types.contains(fs_type)
    }

    /// True when user patterns exclude this mount. A matching include on
    /// either the path or the volume wins over any exclude.
    pub fn is_excluded(&self, path: &str, volume: &str) -> bool {
        if any_match(&self.path_includes, path) || any_match(&self.volume_includes, volume) {
            return false;
        }
        any_match(&self.path_excludes, path) || any_match(&self.volume_excludes, volume)
    }

    /// Root is exempt from the pseudo-type and pattern rules, but a
    /// local-only listing still drops it when it is network-backed.
    pub fn is_eligible(&self, path: &str, volume: &str, fs_type: &str, local_only: bool) -> bool {
        if local_only && self.is_network(fs_type) {
            return false;
        }
        if path != "/" && (self.is_pseudo(fs_type) || self.is_excluded(path, volume)) {
            return false;
        }
        true
    }
}
