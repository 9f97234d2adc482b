//! Word-level matching primitives.
//!
//! Each primitive is a pure boolean test between a candidate string and a
//! query keyword. The primitives deliberately overlap; the token matcher
//! combines them as a plain OR, trading precision for recall.

use crate::error::{Result, SearchError};
use crate::fuzzy::levenshtein_distance;

/// Validate a keyword and return its trimmed form.
///
/// A keyword must be non-empty after trimming and contain no internal
/// whitespace. Violations are contract errors in the caller, surfaced as
/// errors rather than reported as non-matches.
pub(crate) fn validate_keyword(keyword: &str) -> Result<&str> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyKeyword);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(SearchError::MultiWordKeyword(keyword.to_string()));
    }
    Ok(trimmed)
}

/// Check whether a sentence contains a keyword as a full word.
///
/// The sentence is split on runs of whitespace and the keyword matches if
/// any resulting token equals it, ignoring case. A partial token is not a
/// match.
///
/// # Arguments
/// * `sentence` - Text to search in
/// * `word` - Keyword to look for; must be a single non-empty word
///
/// # Returns
/// * `Ok(true)` if some whitespace-delimited token of `sentence` equals the
///   trimmed `word` case-insensitively
/// * `Err` if `word` is empty after trimming or contains internal whitespace
///
/// # Example
/// ```
/// use cardbox_search::contains_word;
///
/// assert!(contains_word("ABc def", "abc").unwrap());
/// assert!(contains_word("ABc def", "DEF").unwrap());
/// assert!(!contains_word("ABc def", "AB").unwrap()); // not a full word
/// ```
pub fn contains_word(sentence: &str, word: &str) -> Result<bool> {
    let word_lower = validate_keyword(word)?.to_lowercase();

    Ok(sentence
        .split_whitespace()
        .any(|token| token.to_lowercase() == word_lower))
}

/// Check whether a sentence contains a keyword as a substring.
///
/// Containment is case-insensitive and may span token boundaries, so
/// `"Bc de"` is found inside `"ABc def"`. The needle is trimmed before
/// matching but may contain internal whitespace.
///
/// # Arguments
/// * `sentence` - Text to search in
/// * `needle` - Substring to look for; must be non-empty after trimming
///
/// # Returns
/// * `Ok(true)` if the lower-cased sentence contains the lower-cased
///   trimmed needle
/// * `Err` if `needle` is empty after trimming
pub fn contains_substring(sentence: &str, needle: &str) -> Result<bool> {
    let trimmed = needle.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyKeyword);
    }

    Ok(sentence.to_lowercase().contains(&trimmed.to_lowercase()))
}

/// Decide whether one name token matches one query keyword.
///
/// A token matches if any of the three primitives succeeds, checked in
/// order of decreasing strictness with short-circuiting: exact whole-word
/// equality, then substring containment, then edit distance within
/// `threshold`. The order affects only cost, never the outcome.
///
/// # Arguments
/// * `token` - One whitespace-delimited token of a display name
/// * `keyword` - Query keyword; must be a single non-empty word
/// * `threshold` - Maximum edit distance accepted by the fuzzy primitive
///
/// # Returns
/// * `Ok(true)` if any primitive accepts the (token, keyword) pair
/// * `Err` if `keyword` is empty after trimming or contains internal
///   whitespace
///
/// # Example
/// ```
/// use cardbox_search::matches_keyword;
///
/// assert!(matches_keyword("Alice", "alice", 2).unwrap()); // exact word
/// assert!(matches_keyword("Alice", "lic", 2).unwrap());   // substring
/// assert!(matches_keyword("Alice", "alise", 2).unwrap()); // one edit away
/// assert!(!matches_keyword("Alice", "bob", 2).unwrap());
/// ```
pub fn matches_keyword(token: &str, keyword: &str, threshold: usize) -> Result<bool> {
    let keyword_lower = validate_keyword(keyword)?.to_lowercase();
    Ok(matches_keyword_lower(token, &keyword_lower, threshold))
}

/// Token-level decision against a pre-validated, pre-lower-cased keyword.
///
/// [`crate::KeywordQuery`] lower-cases its keywords once at construction
/// and calls this directly, skipping per-pair validation.
pub(crate) fn matches_keyword_lower(token: &str, keyword_lower: &str, threshold: usize) -> bool {
    let token_lower = token.to_lowercase();

    // Exact whole-word match
    if token_lower.split_whitespace().any(|word| word == keyword_lower) {
        return true;
    }

    // Case-insensitive containment
    if token_lower.contains(keyword_lower) {
        return true;
    }

    // Bounded edit distance
    levenshtein_distance(&token_lower, keyword_lower) <= threshold
}
