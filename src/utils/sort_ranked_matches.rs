use crate::types::RankedMatches;

/// Sorts scored entries into their final ranked order.
///
/// This function takes the scored `(Percent, (EntryName, Id))` pairs produced
/// for one query and returns them sorted for presentation.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by score in descending order (higher similarity first).
/// - **Secondary:** The sort is stable, so entries with equal scores retain
///   their relative order from the original entry collection. This keeps
///   ranked output deterministic for reproducible results.
///
/// No deduplication of identical names or scores is performed.
///
/// ### Parameters:
/// - `scored_entries`: The scored pairs for one query, in entry-collection order.
///
/// ### Returns:
/// - The same `Vec`, sorted as described above.
pub fn sort_ranked_matches<Id>(mut scored_entries: RankedMatches<Id>) -> RankedMatches<Id> {
    // `sort_by` is stable; candidates arrive in entry-collection order, so
    // equal scores keep that order.
    scored_entries.sort_by(|a, b| b.0.cmp(&a.0));

    scored_entries
}
