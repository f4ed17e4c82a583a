use crate::{ListQuery, SortDirection};

#[test]
fn test_default_query_is_all_unset() {
    let query = ListQuery::default();
    assert!(query.page.is_none());
    assert!(query.search.is_none());
    // Unset fields are omitted from serialization entirely
    assert_eq!(query.cache_key(), "{}");
}

#[test]
fn test_cache_key_is_stable_for_equal_queries() {
    let a = ListQuery {
        page: Some(2),
        items_per_page: Some(25),
        sort_column: Some("email".to_string()),
        sort_direction: Some(SortDirection::Desc),
        search: None,
        entity_type: None,
    };
    let b = a.clone();
    assert_eq!(a.cache_key(), b.cache_key());
}

#[test]
fn test_cache_key_distinguishes_different_queries() {
    let a = ListQuery {
        page: Some(1),
        ..Default::default()
    };
    let b = ListQuery {
        page: Some(2),
        ..Default::default()
    };
    assert_ne!(a.cache_key(), b.cache_key());
}

#[test]
fn test_wire_names_are_camel_case() {
    let query = ListQuery {
        items_per_page: Some(50),
        sort_direction: Some(SortDirection::Asc),
        ..Default::default()
    };
    let value = serde_json::to_value(&query).unwrap();
    assert_eq!(value["itemsPerPage"], 50);
    assert_eq!(value["sortDirection"], "asc");
}
