//! URL slug generation.

use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Derive a URL slug from a title.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// into a single `-`, and trims leading/trailing dashes.
///
/// ```
/// use herald_core::slug::slugify;
///
/// assert_eq!(slugify("Crime Statistics: Q3 2026"), "crime-statistics-q3-2026");
/// ```
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(slugify("Road traffic estimates"), "road-traffic-estimates");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("Births -- & deaths!!"), "births-deaths");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(slugify("  (Provisional) figures  "), "provisional-figures");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(slugify("Données été"), "donn-es-t");
    }

    #[test]
    fn empty_title() {
        assert_eq!(slugify(""), "");
    }
}
