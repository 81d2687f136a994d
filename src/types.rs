// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for index matching.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the display text of an indexed entry (e.g. a person's full name) as an owned `String`.
pub type EntryName = String;

/// Position of an entry within the original entry collection, represented as a `usize`.
/// Candidate sets are expressed in terms of these positions so that ranking can look up
/// the displayed name directly, and so that ties naturally fall back to collection order.
pub type EntryIndex = usize;

/// An integer similarity score in `[0, 100]`, truncated from a scorer's `[0, 1]` output.
pub type Percent = u8;

/// A list of entries supplied at index-build time, where each entry includes:
/// - `EntryName`: The entry's display text.
/// - `Id`: The caller-supplied identifier for the entry.
///
/// Identifiers should be unique per logical record, but the builder does not validate this.
pub type EntryList<Id> = Vec<(EntryName, Id)>;

/// A single scored result: the truncated percentage similarity paired with the
/// matched entry's `(name, identifier)`.
pub type ScoredEntry<Id> = (Percent, (EntryName, Id));

/// The ranked results for one query, sorted by score descending. Candidates with
/// equal scores retain their relative order from the original entry collection.
pub type RankedMatches<Id> = Vec<ScoredEntry<Id>>;

/// Results of a batch run: each query entry paired with its own ranked result list.
pub type BatchResults<Id> = Vec<((EntryName, Id), RankedMatches<Id>)>;
