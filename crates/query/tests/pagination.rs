//! Scenario tests for filter composition and pagination invariants

use catalog_graph::{CatalogBuilder, CatalogGraph};
use catalog_protocol::{Category, MessageRecord};
use catalog_query::{query, QueryState};

fn make_record(id: &str, category: &str) -> MessageRecord {
    MessageRecord {
        id: id.to_string(),
        name: id.to_string(),
        version: "0.0.1".to_string(),
        category: Category::from(category),
        ..MessageRecord::default()
    }
}

/// 3 queries and 2 events, in source order.
fn mixed_snapshot() -> CatalogGraph {
    let records = vec![
        make_record("GetOrder", "queries"),
        make_record("OrderPlaced", "events"),
        make_record("GetInventory", "queries"),
        make_record("InventoryAdjusted", "events"),
        make_record("GetPayment", "queries"),
    ];
    CatalogBuilder::new().build(&records).graph
}

#[test]
fn test_type_filter_with_pagination() {
    let graph = mixed_snapshot();
    let state = QueryState::new()
        .with_categories([Category::Queries])
        .with_page_size(2);

    let page = query(graph.nodes(), &state).unwrap();

    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.current_page, 1);
    let ids: Vec<&str> = page.items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["GetOrder", "GetInventory"]);

    let page = query(graph.nodes(), &state.with_page(2)).unwrap();
    assert_eq!(page.current_page, 2);
    let ids: Vec<&str> = page.items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["GetPayment"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let graph = mixed_snapshot();

    for needle in ["order", "ORDER", "OrDeR"] {
        let state = QueryState::new().with_search(needle);
        let page = query(graph.nodes(), &state).unwrap();

        let ids: Vec<&str> = page.items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["GetOrder", "OrderPlaced"], "needle: {needle}");
    }
}

#[test]
fn test_full_category_set_equals_empty_set() {
    let graph = mixed_snapshot();

    let unrestricted = query(graph.nodes(), &QueryState::new()).unwrap();
    let all_known = query(
        graph.nodes(),
        &QueryState::new().with_categories(Category::KNOWN),
    )
    .unwrap();

    assert_eq!(unrestricted, all_known);
}

#[test]
fn test_filters_compose_in_fixed_order() {
    let graph = mixed_snapshot();
    let state = QueryState::new()
        .with_categories([Category::Events])
        .with_search("inventory");

    let page = query(graph.nodes(), &state).unwrap();

    let ids: Vec<&str> = page.items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["InventoryAdjusted"]);
}

#[test]
fn test_page_is_clamped_when_results_shrink() {
    let graph = mixed_snapshot();

    // Page 3 exists without filters at page size 2 (5 items)
    let state = QueryState::new().with_page_size(2).with_page(3);
    let page = query(graph.nodes(), &state).unwrap();
    assert_eq!(page.current_page, 3);
    assert_eq!(page.items.len(), 1);

    // The same page request after narrowing to events clamps to the last page
    let narrowed = state.with_categories([Category::Events]);
    let page = query(graph.nodes(), &narrowed).unwrap();
    assert_eq!(page.total_items, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.items.len(), 2);
}

#[test]
fn test_empty_result_set_keeps_one_page() {
    let graph = mixed_snapshot();
    let state = QueryState::new().with_search("no such message");

    let page = query(graph.nodes(), &state).unwrap();

    assert_eq!(page.total_items, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.current_page, 1);
    assert!(page.items.is_empty());
}

#[test]
fn test_total_pages_rounds_up() {
    let graph = mixed_snapshot();

    for (page_size, expected_pages) in [(1, 5), (2, 3), (3, 2), (5, 1), (100, 1)] {
        let state = QueryState::new().with_page_size(page_size);
        let page = query(graph.nodes(), &state).unwrap();

        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, expected_pages, "page size {page_size}");
        assert!(page.current_page >= 1 && page.current_page <= page.total_pages);
    }
}

#[test]
fn test_window_slices_are_contiguous_and_disjoint() {
    let graph = mixed_snapshot();
    let state = QueryState::new().with_page_size(2);

    let mut seen: Vec<&str> = Vec::new();
    for page_no in 1..=3 {
        let page = query(graph.nodes(), &state.clone().with_page(page_no)).unwrap();
        seen.extend(page.items.iter().map(|n| n.id.as_str()));
    }

    let in_order: Vec<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
    assert_eq!(seen, in_order);
}

#[test]
fn test_query_does_not_disturb_the_snapshot() {
    let graph = mixed_snapshot();
    let before: Vec<String> = graph.nodes().map(|n| n.id.clone()).collect();

    let _ = query(graph.nodes(), &QueryState::new().with_search("order"));
    let _ = query(graph.nodes(), &QueryState::new().with_page_size(0));

    let after: Vec<String> = graph.nodes().map(|n| n.id.clone()).collect();
    assert_eq!(before, after);
}
