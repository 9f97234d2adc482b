//! Fuzzy matching algorithms.

/// Default maximum edit distance for contact-name matching.
///
/// Two edits let a typo'd or slightly misremembered name through while
/// keeping unrelated words out. Callers can tune the threshold per query;
/// this is only the default.
pub const DEFAULT_FUZZY_THRESHOLD: usize = 2;

/// Calculate Levenshtein edit distance between two strings.
///
/// The distance is the minimum number of single-character insertions,
/// deletions, or substitutions needed to transform `a` into `b`. Comparison
/// is per `char` and case-sensitive; callers that want case-insensitive
/// distances lower-case both inputs first (see [`fuzzy_match`]).
///
/// Runs in O(len(a) * len(b)) time and O(len(b)) space using a single
/// rolling row of the Wagner-Fischer matrix.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform `a` into `b`
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // costs[j] holds the distance between the current prefix of `a` and the
    // first j characters of `b`; nw carries the diagonal value the previous
    // inner step overwrote.
    let mut costs: Vec<usize> = (0..=n).collect();

    for i in 1..=m {
        let mut nw = costs[0];
        costs[0] = i;
        for j in 1..=n {
            let diagonal = if a_chars[i - 1] == b_chars[j - 1] {
                nw
            } else {
                nw + 1
            };
            let next = (1 + costs[j].min(costs[j - 1])).min(diagonal);
            nw = costs[j];
            costs[j] = next;
        }
    }

    costs[n]
}

/// Check whether two strings are within a maximum edit distance.
///
/// Both inputs are lower-cased before the distance is computed, so matching
/// is case-insensitive. Total for all inputs: any two strings have a
/// well-defined distance, and a `threshold` of zero degrades to
/// case-insensitive equality.
///
/// # Arguments
/// * `source` - Candidate string (typically one token of a name)
/// * `keyword` - Query keyword to compare against
/// * `threshold` - Maximum edit distance accepted as a match
///
/// # Returns
/// true if the Levenshtein distance between the lower-cased inputs is at
/// most `threshold`
pub fn fuzzy_match(source: &str, keyword: &str, threshold: usize) -> bool {
    let source = source.to_lowercase();
    let keyword = keyword.to_lowercase();
    levenshtein_distance(&source, &keyword) <= threshold
}
