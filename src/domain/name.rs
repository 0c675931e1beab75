use once_cell::sync::Lazy;
use regex::Regex;

/// package.json name grammar: optional @scope/ prefix, then a name segment
/// whose first character may not be `.`, `_`, or `*`.
static VALID_PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$").unwrap()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static INVALID_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\-~]+").unwrap());

pub fn is_valid_package_name(name: &str) -> bool {
    VALID_PACKAGE_NAME.is_match(name)
}

/// Derives a manifest-safe package name from an arbitrary project name.
///
/// Lossy and idempotent: trims, lowercases, collapses whitespace runs to a
/// single `-`, strips one leading `.` or `_`, and replaces every run of
/// characters outside `[a-z0-9-~]` with a single `-`.
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let stripped = hyphenated
        .strip_prefix(['.', '_'])
        .unwrap_or(hyphenated.as_ref());
    INVALID_CHARS.replace_all(stripped, "-").into_owned()
}

/// Normalizes a user-supplied target directory: trims whitespace and strips
/// trailing slashes.
pub fn format_target_dir(target_dir: &str) -> String {
    target_dir.trim().trim_end_matches('/').to_string()
}
