//! Keyword query predicate over contact display names.

use crate::error::{Result, SearchError};
use crate::fuzzy::DEFAULT_FUZZY_THRESHOLD;
use crate::word::{matches_keyword_lower, validate_keyword};

/// A validated free-text query that decides whether a display name should
/// be shown.
///
/// A name matches when at least one keyword matches at least one
/// whitespace-delimited token of the name under any of the three matching
/// primitives: whole-word equality, substring containment, or edit distance
/// within the threshold.
///
/// Construction validates every keyword once, so [`matches`](Self::matches)
/// is total and infallible. The query is immutable after construction and
/// can be shared freely across threads.
///
/// # Example
/// ```
/// use cardbox_search::KeywordQuery;
///
/// let query = KeywordQuery::new(vec!["alise".to_string()]).unwrap();
/// assert!(query.matches("Alice Tan")); // one edit away from "alice"
/// assert!(!query.matches("Bob Lee"));
/// ```
#[derive(Debug, Clone)]
pub struct KeywordQuery {
    /// Keywords as supplied by the caller; these define query identity.
    keywords: Vec<String>,
    /// Trimmed, lower-cased copies precomputed for matching.
    keywords_lower: Vec<String>,
    threshold: usize,
}

impl KeywordQuery {
    /// Create a query using [`DEFAULT_FUZZY_THRESHOLD`].
    ///
    /// # Arguments
    /// * `keywords` - Query keywords; each must be a single non-empty word
    ///
    /// # Returns
    /// * `Ok(KeywordQuery)` ready for matching
    /// * `Err` if the list is empty, or any keyword is empty after trimming
    ///   or contains internal whitespace
    pub fn new(keywords: Vec<String>) -> Result<Self> {
        Self::with_threshold(keywords, DEFAULT_FUZZY_THRESHOLD)
    }

    /// Create a query with an explicit fuzzy threshold.
    ///
    /// A threshold of zero disables fuzzy matching entirely; whole-word and
    /// substring matching still apply.
    pub fn with_threshold(keywords: Vec<String>, threshold: usize) -> Result<Self> {
        if keywords.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let keywords_lower = keywords
            .iter()
            .map(|keyword| validate_keyword(keyword).map(str::to_lowercase))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            keywords,
            keywords_lower,
            threshold,
        })
    }

    /// Decide whether a display name matches this query.
    ///
    /// True iff some keyword matches some whitespace-delimited token of
    /// `name`. A name with no tokens (empty or all whitespace) never
    /// matches.
    pub fn matches(&self, name: &str) -> bool {
        name.split_whitespace().any(|token| {
            self.keywords_lower
                .iter()
                .any(|keyword| matches_keyword_lower(token, keyword, self.threshold))
        })
    }

    /// Keywords as supplied at construction.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Maximum edit distance accepted by the fuzzy primitive.
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

/// Queries are equal when their as-supplied keyword lists are equal: same
/// elements, same order, case-sensitive. The threshold tunes matching and
/// is not part of query identity.
impl PartialEq for KeywordQuery {
    fn eq(&self, other: &Self) -> bool {
        self.keywords == other.keywords
    }
}

impl Eq for KeywordQuery {}
