//! Fuzzy keyword matching for Cardbox contact names.
//!
//! This crate decides whether a contact's display name should be shown for
//! a free-text query. It provides:
//! - Levenshtein edit distance (rolling-row Wagner-Fischer)
//! - Whole-word, substring, and bounded-edit-distance matching primitives
//! - [`KeywordQuery`], the validated any-keyword/any-token name predicate
//! - Order-preserving batch filtering with optional parallelism
//! - WASM bindings for the GUI shell
//!
//! # Example
//!
//! ```
//! use cardbox_search::KeywordQuery;
//!
//! let keywords = vec!["alise".to_string(), "tan".to_string()];
//! let query = KeywordQuery::new(keywords).unwrap();
//!
//! assert!(query.matches("Alice Tan")); // "alise" is one edit from "alice"
//! assert!(query.matches("Tan Wei"));   // whole-word match on "tan"
//! assert!(!query.matches("Bob Lee"));
//! ```

mod fuzzy;
mod word;
mod query;
mod filter;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use fuzzy::{fuzzy_match, levenshtein_distance, DEFAULT_FUZZY_THRESHOLD};
pub use word::{contains_substring, contains_word, matches_keyword};
pub use query::KeywordQuery;
pub use filter::{filter_matching, matching_positions};
pub use error::{Result, SearchError};
