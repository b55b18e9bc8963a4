//! Static country fallback
//!
//! Used when the country fetch fails at startup so the form stays usable.
//! Codes are ISO 3166-1 alpha-2; the list is pre-sorted by English name.

use crate::types::SelectorOption;

const FALLBACK_COUNTRIES: &[(&str, &str)] = &[
    ("DZ", "Algeria"),
    ("BE", "Belgium"),
    ("CA", "Canada"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("IT", "Italy"),
    ("MA", "Morocco"),
    ("ES", "Spain"),
    ("CH", "Switzerland"),
    ("TN", "Tunisia"),
    ("GB", "United Kingdom"),
    ("US", "United States"),
];

/// The built-in country list, as selector options.
#[must_use]
pub fn fallback_countries() -> Vec<SelectorOption> {
    FALLBACK_COUNTRIES
        .iter()
        .map(|(code, name)| SelectorOption::new(*code, *name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_sorted_by_name() {
        let options = fallback_countries();
        let mut labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        let original = labels.clone();
        labels.sort_unstable();
        assert_eq!(labels, original);
    }

    #[test]
    fn fallback_codes_are_alpha2() {
        for option in fallback_countries() {
            assert_eq!(option.value.len(), 2);
            assert!(option.value.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
