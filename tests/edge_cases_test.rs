/// Edge cases: empty terms and queries, unicode, repeated terms, large inputs
use substring_index::index::LookupTable;
use substring_index::{IndexConfig, IndexService};

#[test]
fn test_empty_query_matches_all_items() {
    let mut index = IndexService::new();
    index.add_item("a", 1);
    index.add_item("b", 2);
    index.add_item("", 3);

    let results = index.search("");
    assert_eq!(results.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn test_empty_term_is_only_found_by_empty_query() {
    let mut index = IndexService::new();
    index.add_item("", "blank");

    assert!(index.search("anything").is_empty());
    assert_eq!(index.search("").len(), 1);
}

#[test]
fn test_full_term_query_matches_exactly_that_term() {
    let mut index = IndexService::new();
    index.add_item("hello1", "hv1");
    index.add_item("hello2", "hv2");

    let results = index.search("hello1");
    assert_eq!(results.len(), 1);
    assert_eq!(results[&0].search_term, "hello1");
}

#[test]
fn test_query_longer_than_term_never_matches() {
    let mut index = IndexService::new();
    index.add_item("abc", ());
    assert!(index.search("abcd").is_empty());
}

#[test]
fn test_unicode_terms() {
    let mut index = IndexService::new();
    index.add_item("日本語のテキスト", "ja");
    index.add_item("emoji 🦀 crab", "crab");

    assert_eq!(index.search("本語").len(), 1);
    assert_eq!(index.search("🦀").len(), 1);
    assert!(index.search("🐍").is_empty());
}

#[test]
fn test_special_characters_are_literal() {
    let mut index = IndexService::new();
    index.add_item("a.b*c", 1);
    index.add_item("abbc", 2);
    index.add_item("_start_x__is__0_stop_", 3);

    let results = index.search(".b*");
    assert_eq!(results.keys().copied().collect::<Vec<_>>(), vec![0]);
    assert_eq!(index.search("__is__").len(), 1);
}

#[test]
fn test_same_value_under_many_terms() {
    let mut index = IndexService::new();
    for term in ["red", "reddish", "bored"] {
        index.add_item(term, "shared");
    }

    let results = index.search("red");
    assert_eq!(results.len(), 3);
    assert!(results.values().all(|r| r.item == "shared"));
}

#[test]
fn test_repeated_term_lists_earliest_first() {
    let mut index = IndexService::new();
    index.add_item("dup", "a");
    index.add_item("other", "b");
    index.add_item("dup", "c");

    let items: Vec<_> = index.search("dup").values().map(|r| r.item).collect();
    assert_eq!(items, vec!["a", "c"]);
    assert_eq!(index.index()["dup"], vec![0, 2]);
}

#[test]
fn test_large_index() {
    let mut index = IndexService::new();
    for i in 0..10_000 {
        index.add_item(&format!("item-{}", i), i);
    }
    index.add_item("last item", 10_000);

    let results = index.search("last");
    assert_eq!(results.keys().copied().collect::<Vec<_>>(), vec![10_000]);
    assert_eq!(index.search("item-999").len(), 11); // 999 and 9990..=9999
}

#[test]
fn test_preloaded_lookup_table_items_are_not_searchable() {
    let table = LookupTable::from_values(vec!["a".to_string(), "b".to_string()]);
    let mut index = IndexService::with_lookup_table(table, IndexConfig::default());

    assert_eq!(index.add_item("c", "c".to_string()), 2);
    assert_eq!(index.len(), 3);
    assert_eq!(index.search("").len(), 1);
    assert_eq!(index.lookup_table().get(1).map(String::as_str), Some("b"));
}
