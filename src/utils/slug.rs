// src/utils/slug.rs

//! Slug derivation for post titles.

use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static slug pattern"));

/// Derive a URL-safe slug from a title.
///
/// Lower-cases, collapses every run of characters outside `a-z0-9` into one
/// hyphen and strips hyphens from both ends. A title without any ASCII
/// alphanumerics yields an empty slug.
///
/// # Examples
/// ```
/// use sheetpost::utils::slug::slugify;
///
/// assert_eq!(slugify("Hello, World"), "hello-world");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
