//! Built-in pairwise similarity scorers.
//!
//! A scorer is any `Fn(&str, &str) -> f64` returning a similarity in the
//! closed unit interval, higher meaning more similar. The retrieval layer
//! places no constraint on which metric is used beyond that range contract,
//! so these wrappers are interchangeable with caller-supplied closures.

/// Jaro similarity. Effective for short strings such as personal names.
pub fn jaro(a: &str, b: &str) -> f64 {
    strsim::jaro(a, b)
}

/// Jaro-Winkler similarity: Jaro with a bonus for a shared prefix, which
/// suits names where the leading characters are the most reliable.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(a, b)
}

/// Levenshtein edit distance, normalized to `[0, 1]` against the longer input.
pub fn levenshtein(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Damerau-Levenshtein edit distance (edits plus transpositions), normalized
/// to `[0, 1]` against the longer input.
pub fn damerau_levenshtein(a: &str, b: &str) -> f64 {
    strsim::normalized_damerau_levenshtein(a, b)
}

/// Exact equality: `1.0` on identical strings, `0.0` otherwise.
pub fn exact(a: &str, b: &str) -> f64 {
    if a == b {
        1.0
    } else {
        0.0
    }
}
