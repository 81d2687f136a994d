use crate::types::{EntryIndex, EntryList, RankedMatches, Token, TokenRef};
use crate::utils::{similarity_to_percent, sort_ranked_matches};
use crate::Tokenizer;

use log::{debug, info};
use std::collections::{HashMap, HashSet};

/// Inverted index mapping tokens to the positions of the entries containing them.
///
/// Built once from the full entry collection and read-only afterwards; queries
/// borrow it without synchronization, which is what makes batch retrieval safe
/// to parallelize.
pub struct TokenIndex<Id> {
    entries: EntryList<Id>,
    postings: HashMap<Token, Vec<EntryIndex>>,
    tokenizer: Tokenizer,
}

impl<Id: Clone> TokenIndex<Id> {
    /// Builds an index over the given entries using the default name tokenizer.
    ///
    /// # Arguments
    /// * `entries` - The `(name, identifier)` pairs to index. Names need not be
    ///   unique; identifiers should be unique per logical record, but this is
    ///   not validated.
    pub fn new(entries: EntryList<Id>) -> Self {
        Self::with_tokenizer(entries, Tokenizer::name_parser())
    }

    /// Builds an index over the given entries with a caller-supplied tokenizer.
    ///
    /// The tokenizer is captured and reused verbatim for every query against
    /// this index. An entry whose name tokenizes to the empty set is kept in
    /// the entry snapshot but is unreachable by any query.
    pub fn with_tokenizer(entries: EntryList<Id>, tokenizer: Tokenizer) -> Self {
        let mut postings: HashMap<Token, Vec<EntryIndex>> = HashMap::new();

        for (entry_index, (name, _id)) in entries.iter().enumerate() {
            // An entry contributes at most one posting per distinct token,
            // even if its name repeats that token.
            let mut seen_tokens: HashSet<Token> = HashSet::new();

            for token in tokenizer.tokenize(name) {
                if seen_tokens.insert(token.clone()) {
                    postings.entry(token).or_default().push(entry_index);
                }
            }
        }

        info!(
            "Indexed {} entries into {} token buckets",
            entries.len(),
            postings.len()
        );

        TokenIndex {
            entries,
            postings,
            tokenizer,
        }
    }

    /// Computes the candidate set for a query: the positions of all entries
    /// sharing at least one token with it.
    ///
    /// Query tokens absent from the index contribute nothing. A query that
    /// tokenizes to no tokens, or whose tokens are all unknown, yields an
    /// empty candidate list.
    ///
    /// # Returns
    /// Entry positions sorted ascending, so downstream ranking inherits the
    /// original entry-collection order for its stable tie-break.
    pub fn candidates(&self, query: &str) -> Vec<EntryIndex> {
        let mut candidate_set: HashSet<EntryIndex> = HashSet::new();

        for token in self.tokenizer.tokenize(query) {
            if let Some(bucket) = self.postings.get(&token) {
                candidate_set.extend(bucket.iter().copied());
            }
        }

        let mut candidate_indices: Vec<EntryIndex> = candidate_set.into_iter().collect();
        candidate_indices.sort_unstable();

        debug!(
            "Query {:?} restricted to {} of {} entries",
            query,
            candidate_indices.len(),
            self.entries.len()
        );

        candidate_indices
    }

    /// Scores every candidate for the query and returns the full ranked list,
    /// sorted by score descending with equal scores keeping entry order.
    ///
    /// # Arguments
    /// * `scorer` - Pairwise similarity function returning a value in `[0, 1]`.
    ///   Out-of-range output is clamped before percent conversion.
    /// * `query` - The query text, scored against each candidate's original name.
    pub fn rank<S>(&self, scorer: &S, query: &str) -> RankedMatches<Id>
    where
        S: Fn(&str, &str) -> f64,
    {
        let scored = self
            .candidates(query)
            .into_iter()
            .map(|entry_index| {
                let (name, id) = &self.entries[entry_index];
                let percent = similarity_to_percent(scorer(query, name));
                (percent, (name.clone(), id.clone()))
            })
            .collect();

        sort_ranked_matches(scored)
    }

    /// The ordered snapshot of `(name, identifier)` pairs the index was built from.
    pub fn entries(&self) -> &EntryList<Id> {
        &self.entries
    }

    /// Gets the number of indexed entries, including ones with no tokens.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Gets the number of distinct tokens in the index.
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index holds a postings bucket for the given token.
    ///
    /// Tokens are compared for exact equality in the form the build-time
    /// tokenizer produced them (for the default name parser, uppercase).
    pub fn contains_token(&self, token: &TokenRef) -> bool {
        self.postings.contains_key(token)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The tokenizer captured at build time.
    pub fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }
}
