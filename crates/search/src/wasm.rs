//! WASM bindings for the name-matching engine.
//!
//! The desktop shell renders the contact list in a web view and calls these
//! functions on every keystroke. Inputs arrive as JSON strings; malformed
//! input yields a neutral answer (no match, empty result) rather than an
//! exception across the boundary.

use wasm_bindgen::prelude::*;

use crate::{KeywordQuery, DEFAULT_FUZZY_THRESHOLD};

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Default maximum edit distance used for contact-name matching.
#[wasm_bindgen]
pub fn default_fuzzy_threshold() -> usize {
    DEFAULT_FUZZY_THRESHOLD
}

/// Decide whether a display name matches a keyword query.
///
/// # Arguments
/// * `name` - Contact display name
/// * `keywords_json` - JSON array of keyword strings
/// * `threshold` - Maximum edit distance for the fuzzy primitive
///
/// # Returns
/// true if the name matches; false on a non-match, malformed JSON, or an
/// invalid keyword list
#[wasm_bindgen]
pub fn name_matches(name: &str, keywords_json: &str, threshold: usize) -> bool {
    let keywords: Vec<String> = match serde_json::from_str(keywords_json) {
        Ok(keywords) => keywords,
        Err(_) => return false,
    };

    match KeywordQuery::with_threshold(keywords, threshold) {
        Ok(query) => query.matches(name),
        Err(_) => false,
    }
}

/// Filter contact rows and return the matching ids as JSON.
///
/// # Arguments
/// * `keywords_json` - JSON array of keyword strings
/// * `contacts_json` - JSON array of rows with `id` and `name` fields
/// * `threshold` - Maximum edit distance for the fuzzy primitive
///
/// # Returns
/// JSON array of the ids whose name matches, in input order; `[]` on
/// malformed input
#[wasm_bindgen]
pub fn filter_contacts(keywords_json: &str, contacts_json: &str, threshold: usize) -> String {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        id: String,
        name: String,
    }

    let keywords: Vec<String> = match serde_json::from_str(keywords_json) {
        Ok(keywords) => keywords,
        Err(_) => return "[]".to_string(),
    };

    let rows: Vec<Row> = match serde_json::from_str(contacts_json) {
        Ok(rows) => rows,
        Err(_) => return "[]".to_string(),
    };

    let query = match KeywordQuery::with_threshold(keywords, threshold) {
        Ok(query) => query,
        Err(_) => return "[]".to_string(),
    };

    let ids: Vec<String> = rows
        .into_iter()
        .filter(|row| query.matches(&row.name))
        .map(|row| row.id)
        .collect();

    serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
}
