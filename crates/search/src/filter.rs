//! Batch filtering of candidate names.
//!
//! The list-rendering collaborator re-runs the query over its full
//! candidate collection on every query change and discards prior results.
//! These entry points perform one such pass, sequentially or in parallel
//! behind the `parallel` feature.

use crate::KeywordQuery;

/// Positions of the matching names, in input order.
///
/// Returns indices rather than values so the caller can map them back onto
/// whatever record type its list holds.
///
/// # Arguments
/// * `query` - The keyword query to evaluate
/// * `names` - Candidate display names
///
/// # Returns
/// Indices into `names` whose name matches, preserving input order.
///
/// # Example
/// ```
/// use cardbox_search::{matching_positions, KeywordQuery};
///
/// let names = ["Alice Tan", "Bob Lee", "Alicia Keys"];
/// let query = KeywordQuery::new(vec!["alice".to_string()]).unwrap();
///
/// assert_eq!(matching_positions(&query, &names), vec![0, 2]);
/// ```
pub fn matching_positions<S: AsRef<str> + Sync>(query: &KeywordQuery, names: &[S]) -> Vec<usize> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        names
            .par_iter()
            .enumerate()
            .filter(|(_, name)| query.matches(name.as_ref()))
            .map(|(position, _)| position)
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        names
            .iter()
            .enumerate()
            .filter(|(_, name)| query.matches(name.as_ref()))
            .map(|(position, _)| position)
            .collect()
    }
}

/// The matching names themselves, in input order.
///
/// # Arguments
/// * `query` - The keyword query to evaluate
/// * `names` - Candidate display names
///
/// # Returns
/// References to the names that match, preserving input order.
pub fn filter_matching<'a, S: AsRef<str> + Sync>(
    query: &KeywordQuery,
    names: &'a [S],
) -> Vec<&'a str> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        names
            .par_iter()
            .map(|name| name.as_ref())
            .filter(|name| query.matches(name))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        names
            .iter()
            .map(|name| name.as_ref())
            .filter(|name| query.matches(name))
            .collect()
    }
}
