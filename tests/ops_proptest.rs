//! Property tests for the pure collection operations
//!
//! Pins the ordering and pagination invariants of the sequence operations across
//! arbitrary collection contents: insert/delete round trips, pagination
//! bounds, and filtering behavior.

use proptest::prelude::*;

use binfolio::backend::collections::{
    delete_by_id, filter_substring, insert_front, paginate,
};
use binfolio::backend::store::document::CodeSnippet;

fn snippet(id: usize, title: &str, code: &str) -> CodeSnippet {
    let mut s = CodeSnippet::new(title.to_string(), code.to_string());
    s.id = format!("id-{id}");
    s
}

fn snippets(contents: &[(String, String)]) -> Vec<CodeSnippet> {
    contents
        .iter()
        .enumerate()
        .map(|(i, (title, code))| snippet(i, title, code))
        .collect()
}

proptest! {
    /// `delete_by_id(insert_front(S, r), r.id) == S`
    #[test]
    fn prop_insert_delete_round_trip(
        contents in prop::collection::vec(("[a-z]{0,8}", "[a-z]{0,8}"), 0..20)
    ) {
        let original = snippets(&contents);
        let mut seq = original.clone();

        let mut transient = CodeSnippet::new("transient".to_string(), "x".to_string());
        transient.id = "transient-id".to_string();
        insert_front(&mut seq, transient);

        prop_assert_eq!(seq.len(), original.len() + 1);
        let removed = delete_by_id(&mut seq, "transient-id");
        prop_assert!(removed.is_some());
        prop_assert_eq!(seq, original);
    }

    /// Pagination never over-fills a page and always reports ceil totals
    #[test]
    fn prop_paginate_bounds(
        len in 0usize..60,
        page in 1usize..12,
        limit in 1usize..12,
    ) {
        let contents: Vec<(String, String)> =
            (0..len).map(|i| (format!("t{i}"), "c".to_string())).collect();
        let seq = snippets(&contents);

        let result = paginate(&seq, page, limit);

        prop_assert!(result.items.len() <= limit);
        prop_assert_eq!(result.total, len);
        prop_assert_eq!(result.total_pages, len.div_ceil(limit));

        // A page past the end is empty, not an error, and total is unchanged
        if (page - 1) * limit >= len {
            prop_assert!(result.items.is_empty());
        } else {
            prop_assert!(!result.items.is_empty());
        }
    }

    /// Filtering returns a subset; every survivor actually matches
    #[test]
    fn prop_filter_is_matching_subset(
        contents in prop::collection::vec(("[a-zA-Z]{0,8}", "[a-zA-Z]{0,8}"), 0..20),
        query in "[a-zA-Z]{1,3}",
    ) {
        let seq = snippets(&contents);
        let filtered = filter_substring(&seq, &query);

        prop_assert!(filtered.len() <= seq.len());
        let needle = query.to_lowercase();
        for survivor in &filtered {
            let matches = survivor.title.to_lowercase().contains(&needle)
                || survivor.code.to_lowercase().contains(&needle);
            prop_assert!(matches);
        }
    }

    /// An empty query is a no-op filter
    #[test]
    fn prop_empty_query_returns_everything(
        contents in prop::collection::vec(("[a-z]{0,8}", "[a-z]{0,8}"), 0..20)
    ) {
        let seq = snippets(&contents);
        prop_assert_eq!(filter_substring(&seq, ""), seq);
    }
}
