pub mod models;
pub use models::{TokenIndex, Tokenizer};
pub mod scorers;
pub mod types;
mod utils;
pub use types::{
    BatchResults, EntryIndex, EntryList, EntryName, Percent, RankedMatches, ScoredEntry, Token,
    TokenRef,
};
pub use utils::similarity_to_percent;

use rayon::prelude::*;

/// Builds a read-only token index over the given `(name, identifier)` entries
/// using the default name tokenizer.
pub fn build_index<Id: Clone>(entries: EntryList<Id>) -> TokenIndex<Id> {
    TokenIndex::new(entries)
}

/// Returns the `n` highest-scoring candidates for the query.
///
/// `n == 0` returns an empty list; `n` beyond the number of scored candidates
/// returns the whole ranked list, with no padding.
pub fn top_n<Id, S>(index: &TokenIndex<Id>, n: usize, scorer: &S, query: &str) -> RankedMatches<Id>
where
    Id: Clone,
    S: Fn(&str, &str) -> f64,
{
    let mut ranked = index.rank(scorer, query);
    ranked.truncate(n);
    ranked
}

/// Returns all candidates whose score is greater than or equal to `cutoff`.
///
/// The comparison is inclusive (`>=`); a cutoff of `0` returns every scored
/// candidate. The ranked list is sorted descending, so the scan stops at the
/// first score below the cutoff.
pub fn within_threshold<Id, S>(
    index: &TokenIndex<Id>,
    cutoff: Percent,
    scorer: &S,
    query: &str,
) -> RankedMatches<Id>
where
    Id: Clone,
    S: Fn(&str, &str) -> f64,
{
    index
        .rank(scorer, query)
        .into_iter()
        .take_while(|(score, _)| *score >= cutoff)
        .collect()
}

/// Applies a retrieval policy independently to each query entry, pairing each
/// query with its own ranked result list.
///
/// `retrieve` is the policy to map over the queries; [`top_n`] and
/// [`within_threshold`] can be passed directly, with `param` carrying the
/// policy's `n` or `cutoff`. Every query depends only on the shared read-only
/// index and its own name, so the batch runs across a rayon worker pool.
/// Results come back in query order, and each per-query ranked list is
/// identical to what the sequential call would produce.
pub fn batch<Id, P, S, R>(
    retrieve: R,
    index: &TokenIndex<Id>,
    param: P,
    scorer: &S,
    queries: &[(EntryName, Id)],
) -> BatchResults<Id>
where
    Id: Clone + Send + Sync,
    P: Copy + Send + Sync,
    S: Fn(&str, &str) -> f64 + Sync,
    R: Fn(&TokenIndex<Id>, P, &S, &str) -> RankedMatches<Id> + Sync,
{
    queries
        .par_iter()
        .map(|query_entry| {
            let ranked = retrieve(index, param, scorer, &query_entry.0);
            (query_entry.clone(), ranked)
        })
        .collect()
}
