//! Filter engine deriving the visible subset of the catalog.
//!
//! The filtered view is always a strict subsequence of the catalog: options are
//! tested in catalog order against a pluggable predicate and kept or dropped,
//! never reordered. Two predicate constructors are provided:
//!
//! - [`substring_filter`]: the default — case-insensitive substring match of the
//!   (trimmed) query against the option label, with an empty query matching
//!   everything.
//! - [`fuzzy_filter`]: skim-style fuzzy matching via the `fuzzy-matcher` crate,
//!   for hosts that prefer fzf-like behavior over plain substring search.
//!
//! Hosts can also supply any closure of the right shape through
//! [`SelectState::with_filter`](crate::SelectState::with_filter).

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::domain::SelectOption;

/// Pluggable filter predicate: does this option match the query?
pub type FilterFn<T> = Box<dyn Fn(&SelectOption<T>, &str) -> bool>;

/// Returns the default case-insensitive substring predicate.
///
/// The query is trimmed and lowercased before matching; an empty (or
/// whitespace-only) query matches every option.
///
/// # Examples
///
/// ```
/// use headless_select::{filter::substring_filter, SelectOption};
///
/// let filter = substring_filter::<u32>();
/// let option = SelectOption::new(1, "Long Option");
///
/// assert!(filter(&option, "long"));
/// assert!(filter(&option, "  OPT  "));
/// assert!(filter(&option, ""));
/// assert!(!filter(&option, "short"));
/// ```
#[must_use]
pub fn substring_filter<T: 'static>() -> FilterFn<T> {
    Box::new(|option, query| {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        option.label.to_lowercase().contains(&query)
    })
}

/// Returns a skim-style fuzzy predicate built on `SkimMatcherV2`.
///
/// Matches when the query characters appear in order within the label (with
/// skim's scoring deciding what counts as a match). An empty query matches
/// every option, mirroring the substring predicate.
#[must_use]
pub fn fuzzy_filter<T: 'static>() -> FilterFn<T> {
    let matcher = SkimMatcherV2::default();
    Box::new(move |option, query| {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        matcher.fuzzy_match(&option.label, query).is_some()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<SelectOption<u32>> {
        vec![
            SelectOption::new(1, "Option 1"),
            SelectOption::new(2, "Long Option"),
        ]
    }

    #[test]
    fn substring_matches_case_insensitively() {
        let filter = substring_filter::<u32>();
        let catalog = catalog();
        let matched: Vec<&str> = catalog
            .iter()
            .filter(|o| filter(o, "long"))
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(matched, vec!["Long Option"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let filter = substring_filter::<u32>();
        assert!(catalog().iter().all(|o| filter(o, "")));
        assert!(catalog().iter().all(|o| filter(o, "   ")));
    }

    #[test]
    fn filtered_set_preserves_catalog_order() {
        let filter = substring_filter::<u32>();
        let matched: Vec<u32> = catalog()
            .iter()
            .filter(|o| filter(o, "option"))
            .map(|o| o.value)
            .collect();
        assert_eq!(matched, vec![1, 2]);
    }

    #[test]
    fn fuzzy_matches_subsequences() {
        let filter = fuzzy_filter::<u32>();
        let option = SelectOption::new(1, "Long Option");
        assert!(filter(&option, "lgopt"));
        assert!(filter(&option, ""));
        assert!(!filter(&option, "xyz"));
    }
}
