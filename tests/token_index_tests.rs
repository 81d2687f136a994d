use name_matcher::{top_n, TokenIndex, Tokenizer};

fn sample_entries() -> Vec<(String, u32)> {
    vec![
        ("Rep. Meg Mueller".to_string(), 1),
        ("Twana Jacobs".to_string(), 2),
        ("Jasper Ortiz".to_string(), 3),
        ("Meg Muller".to_string(), 4),
    ]
}

#[cfg(test)]
mod build_tests {
    use super::*;

    #[test]
    fn test_build_counts() {
        let index = TokenIndex::new(sample_entries());

        assert_eq!(index.entry_count(), 4);
        // REP MEG MUELLER TWANA JACOBS JASPER ORTIZ MULLER; MEG is shared.
        assert_eq!(index.token_count(), 8);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_build_empty_collection() {
        let index: TokenIndex<u32> = TokenIndex::new(vec![]);

        assert!(index.is_empty());
        assert_eq!(index.token_count(), 0);
        assert_eq!(index.candidates("Meg Muller"), Vec::<usize>::new());
    }

    #[test]
    fn test_entries_snapshot_preserves_order() {
        let entries = sample_entries();
        let index = TokenIndex::new(entries.clone());

        assert_eq!(index.entries(), &entries);
    }

    #[test]
    fn test_duplicate_tokens_in_one_name_post_once() {
        let index = TokenIndex::new(vec![("Meg Meg Meg".to_string(), 7)]);

        // One entry, one distinct token, one posting.
        assert_eq!(index.token_count(), 1);
        assert_eq!(index.candidates("Meg"), vec![0]);
    }

    #[test]
    fn test_tokenless_entry_is_unreachable() {
        let entries = vec![
            ("   ".to_string(), 1),
            ("!!!".to_string(), 2),
            ("Twana Jacobs".to_string(), 3),
        ];
        let index = TokenIndex::new(entries);

        // Tokenless entries stay in the snapshot but no query can reach them.
        assert_eq!(index.entry_count(), 3);
        assert_eq!(index.candidates("Twana Jacobs"), vec![2]);

        let ranked = top_n(&index, 10, &|_: &str, _: &str| 1.0, "Twana Jacobs");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].1, ("Twana Jacobs".to_string(), 3));
    }
}

#[cfg(test)]
mod candidate_tests {
    use super::*;

    #[test]
    fn test_candidates_share_at_least_one_token() {
        let index = TokenIndex::new(sample_entries());

        // "Meg" appears in entries 0 and 3 only.
        assert_eq!(index.candidates("Meg"), vec![0, 3]);
    }

    #[test]
    fn test_candidates_union_across_tokens() {
        let index = TokenIndex::new(sample_entries());

        // "Meg" hits entries 0 and 3, "Jacobs" hits entry 1.
        assert_eq!(index.candidates("Meg Jacobs"), vec![0, 1, 3]);
    }

    #[test]
    fn test_overlapping_buckets_deduplicate() {
        let index = TokenIndex::new(sample_entries());

        // "Meg" and "Muller" both hit entry 3; it appears once.
        assert_eq!(index.candidates("Meg Muller"), vec![0, 3]);
    }

    #[test]
    fn test_unknown_tokens_contribute_nothing() {
        let index = TokenIndex::new(sample_entries());

        assert_eq!(index.candidates("Zelda Fitzgerald"), Vec::<usize>::new());
        assert_eq!(index.candidates("Zelda Jacobs"), vec![1]);
    }

    #[test]
    fn test_empty_query_yields_no_candidates() {
        let index = TokenIndex::new(sample_entries());

        assert_eq!(index.candidates(""), Vec::<usize>::new());
        assert_eq!(index.candidates("   "), Vec::<usize>::new());
    }

    #[test]
    fn test_query_tokenized_like_entries() {
        let index = TokenIndex::new(sample_entries());

        // Punctuation and case differences disappear under the name parser,
        // so the decorated query still reaches the same bucket.
        assert_eq!(index.candidates("rep. MEG!"), vec![0, 3]);
    }

    #[test]
    fn test_no_shared_token_excludes_despite_similarity() {
        // Two entries, same display name, but the second is indexed with a
        // tokenizer-breaking name so it shares no token with the query.
        let index = TokenIndex::new(vec![
            ("Meg Muller".to_string(), 1),
            ("MegMuller".to_string(), 2),
        ]);

        // A scorer that calls everything a perfect match cannot resurrect an
        // entry the token filter never produced.
        let always_perfect = |_: &str, _: &str| 1.0;
        let ranked = top_n(&index, 10, &always_perfect, "Meg Muller");

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0], (100, ("Meg Muller".to_string(), 1)));
    }

    #[test]
    fn test_custom_tokenizer_changes_reachability() {
        let entries = vec![("Rep. Meg".to_string(), 1)];
        let index = TokenIndex::with_tokenizer(entries, Tokenizer::verbatim_parser());

        assert_eq!(index.candidates("Rep. Meg"), vec![0]);
        // Dropping the period alters "Rep." but still shares the verbatim
        // "Meg" token, which is enough to stay reachable.
        assert_eq!(index.candidates("Rep Meg"), vec![0]);
        // Lowercasing alters both tokens, so nothing is shared.
        assert_eq!(index.candidates("rep. meg"), Vec::<usize>::new());
        assert_eq!(index.candidates("Rep Meg."), Vec::<usize>::new());
    }

    #[test]
    fn test_contains_token_uses_indexed_token_form() {
        let index = TokenIndex::new(sample_entries());

        assert!(index.contains_token("MEG"));
        assert!(index.contains_token("JACOBS"));
        // Lookups are exact equality against the indexed form; the name
        // parser stores uppercase tokens.
        assert!(!index.contains_token("Meg"));
        assert!(!index.contains_token("ZELDA"));
    }
}
