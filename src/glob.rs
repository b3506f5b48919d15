//! Detection of glob and extglob patterns in candidate path strings.
//!
//! `File::strict` refuses to wrap a path that looks like a glob, because a
//! glob is a *set* of paths and every operation in this crate targets exactly
//! one. The scanners only answer "does this string contain an unescaped
//! pattern"; they do not expand anything.

use once_cell::sync::Lazy;
use regex::Regex;

// Alternative 1 captures a backslash escape (skipped), alternative 2 an
// extglob group: `@(..)`, `?(..)`, `+(..)`, `*(..)` or `!(..)`.
static EXTGLOB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\).|([@?!+*]\(.*\))").unwrap());

// Same escape-skipping shape for plain glob syntax: `*`, `?`, a character
// class, a brace set, an alternation group, or a leading `!` negation.
static GLOB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\).|([*?]|\[.*\]|\{.*\}|\(.*\|.*\)|^!)").unwrap());

/// Returns `true` when `s` contains an unescaped extglob group.
pub fn is_extglob(s: &str) -> bool {
    scan(&EXTGLOB, s)
}

/// Returns `true` when `s` contains unescaped glob syntax.
///
/// Extglob groups count as globs, so `is_glob` implies everything
/// `is_extglob` reports.
pub fn is_glob(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    if is_extglob(s) {
        return true;
    }
    scan(&GLOB, s)
}

// Walk the string match by match: an escape consumes the escaped character
// and scanning resumes after it, so only unescaped metacharacters trigger
// the pattern capture.
fn scan(re: &Regex, s: &str) -> bool {
    let mut rest = s;
    while let Some(caps) = re.captures(rest) {
        if caps.get(2).is_some() {
            return true;
        }
        let whole = caps.get(0).unwrap();
        rest = &rest[whole.end()..];
    }
    false
}
