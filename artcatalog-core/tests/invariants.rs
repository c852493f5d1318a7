//! Query Invariant Tests
//!
//! These tests verify the guarantees every caller relies on.

use std::fs;

use artcatalog_core::{
    query, Catalog, CatalogError, CatalogItem, CatalogQueryEngine, FilterCriteria, ItemKind,
    Scope, SortKey,
};

fn artwork(id: &str, title: &str, category: &str, year: i32, price: Option<f64>) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        kind: ItemKind::Artwork,
        category: category.to_string(),
        medium: "Oil on Canvas".to_string(),
        year,
        start_date: None,
        price,
        available: true,
        featured: false,
        description: None,
        dimensions: None,
        status: None,
        end_date: None,
    }
}

fn alpha_beta() -> Vec<CatalogItem> {
    vec![
        artwork("a", "Alpha", "Paintings", 2020, Some(100.0)),
        artwork("b", "Beta", "Prints", 2023, Some(50.0)),
    ]
}

fn titles(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

fn sample_items() -> Vec<CatalogItem> {
    Catalog::sample().unwrap().items().to_vec()
}

#[test]
fn invariant_category_filter_with_newest() {
    let criteria = FilterCriteria::new()
        .with_category("Paintings")
        .with_sort(SortKey::Newest);

    let result = query(&alpha_beta(), &criteria).unwrap();
    assert_eq!(titles(&result), vec!["Alpha"]);
}

#[test]
fn invariant_price_low_orders_cheapest_first() {
    let criteria = FilterCriteria::new().with_sort(SortKey::PriceLow);
    let result = query(&alpha_beta(), &criteria).unwrap();
    assert_eq!(titles(&result), vec!["Beta", "Alpha"]);
}

#[test]
fn invariant_search_ignores_case() {
    let items = vec![artwork("a", "ALPHA", "Paintings", 2020, None)];
    let result = query(&items, &FilterCriteria::new().with_search("alp")).unwrap();
    assert_eq!(result.len(), 1);
}

#[test]
fn invariant_title_sort_follows_alphabet_not_code_points() {
    let items = vec![
        artwork("z", "Zebra", "Paintings", 2020, None),
        artwork("e", "Éclat", "Paintings", 2020, None),
        artwork("a", "apple", "Paintings", 2020, None),
    ];
    let result = query(&items, &FilterCriteria::new().with_sort(SortKey::Title)).unwrap();
    assert_eq!(titles(&result), vec!["apple", "Éclat", "Zebra"]);
}

#[test]
fn invariant_zero_price_is_not_for_sale() {
    let catalog = Catalog::from_items(vec![
        artwork("f", "Free", "Prints", 2024, Some(0.0)),
        artwork("p", "Paid", "Prints", 2024, Some(10.0)),
    ])
    .unwrap();

    assert_eq!(titles(&catalog.for_sale()), vec!["Paid"]);
    let shop = Scope::Shop.select(&catalog);
    assert_eq!(titles(&shop), vec!["Paid"]);
}

#[test]
fn invariant_identity_filter_keeps_everything() {
    let items = sample_items();
    for key in SortKey::KNOWN {
        let result = query(&items, &FilterCriteria::new().with_sort(key)).unwrap();
        assert_eq!(result.len(), items.len(), "sort {} changed length", key);
    }
}

#[test]
fn invariant_soundness_and_completeness() {
    let items = sample_items();
    let engine = CatalogQueryEngine::new().unwrap();
    let criteria = FilterCriteria::new()
        .with_category("Paintings")
        .with_medium("Canvas")
        .with_search("co")
        .with_sort(SortKey::Title);

    let result = engine.query(&items, &criteria);

    // Every output item passes every active rule
    for item in &result {
        assert!(engine.matches(item, &criteria), "{} should not be shown", item.id);
    }

    // Every passing input item appears exactly once
    for item in items.iter().filter(|i| engine.matches(i, &criteria)) {
        let count = result.iter().filter(|r| r.id == item.id).count();
        assert_eq!(count, 1, "{} should appear once", item.id);
    }
    assert!(!result.is_empty());
}

#[test]
fn invariant_sort_is_stable() {
    // Ethereal, Urban and Cosmic share 2024; they must keep catalog order
    let items = sample_items();
    let criteria = FilterCriteria::new().with_year("2024").with_sort(SortKey::Oldest);
    let result = query(&items, &criteria).unwrap();

    assert_eq!(
        titles(&result),
        vec!["Ethereal Landscapes", "Urban Reflections", "Cosmic Dance", "E-Commerce Platform"]
    );
}

#[test]
fn invariant_price_sorts_are_mirror_images() {
    let items: Vec<_> = sample_items().into_iter().filter(|i| i.price.is_some()).collect();
    let low = query(&items, &FilterCriteria::new().with_sort(SortKey::PriceLow)).unwrap();
    let mut high = query(&items, &FilterCriteria::new().with_sort(SortKey::PriceHigh)).unwrap();
    high.reverse();
    assert_eq!(low, high);
}

#[test]
fn invariant_query_is_idempotent_and_pure() {
    let items = sample_items();
    let before = items.clone();
    let criteria = FilterCriteria::new().with_search("a").with_sort(SortKey::PriceHigh);

    let first = query(&items, &criteria).unwrap();
    let second = query(&items, &criteria).unwrap();

    assert_eq!(first, second);
    assert_eq!(items, before);
}

#[test]
fn invariant_unknown_sort_keeps_input_order() {
    let items = alpha_beta();
    let criteria: FilterCriteria = serde_json::from_str(r#"{"sort": "by-mood"}"#).unwrap();
    assert_eq!(criteria.sort, SortKey::Unsorted);
    assert_eq!(titles(&query(&items, &criteria).unwrap()), vec!["Alpha", "Beta"]);
}

#[test]
fn invariant_empty_result_is_not_an_error() {
    let criteria = FilterCriteria::new().with_year("1999");
    let report = CatalogQueryEngine::new()
        .unwrap()
        .query_report(&sample_items(), &criteria)
        .unwrap();
    assert_eq!(report.shown, 0);
    assert!(report.items.is_empty());
}

#[test]
fn invariant_projects_filter_by_technology() {
    let catalog = Catalog::sample().unwrap();
    let criteria = FilterCriteria::new().with_medium("React").with_sort(SortKey::Newest);
    let result = query(catalog.items(), &criteria).unwrap();

    assert_eq!(titles(&result), vec!["Task Management App"]);
    assert_eq!(result[0].kind, ItemKind::Project);
}

#[test]
fn invariant_newest_uses_start_date_within_year() {
    let catalog = Catalog::sample().unwrap();
    let criteria = FilterCriteria::new().with_category("web").with_sort(SortKey::Newest);
    let result = query(catalog.items(), &criteria).unwrap();
    assert_eq!(
        titles(&result),
        vec!["E-Commerce Platform", "Task Management App", "Weather Dashboard"]
    );
}

#[test]
fn invariant_directory_load_merges_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a_artworks.json"),
        r#"{"items": [{"id": "1", "title": "Alpha", "slug": "alpha", "category": "Paintings",
            "medium": "Oil on Canvas", "year": 2020, "price": 100, "available": true}]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("b_projects.json"),
        r#"{"projects": [{"id": "p1", "title": "Atlas", "slug": "atlas", "description": "Maps",
            "technologies": ["Rust"], "category": "api", "startDate": "2022-05-01"}]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let catalog = Catalog::load(dir.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("1").map(|i| i.title.as_str()), Some("Alpha"));
    assert_eq!(catalog.by_slug("atlas").map(|i| i.year), Some(2022));
    assert_eq!(catalog.for_sale().len(), 1);
}

#[test]
fn invariant_directory_load_rejects_cross_file_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let body = r#"{"items": [{"id": "1", "title": "Alpha", "slug": "alpha", "category": "Paintings",
        "medium": "Oil", "year": 2020}]}"#;
    fs::write(dir.path().join("one.json"), body).unwrap();
    fs::write(dir.path().join("two.json"), body).unwrap();

    let result = Catalog::load_from_dir(dir.path());
    assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
}

#[test]
fn invariant_malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Catalog::load_file(&path).unwrap_err();
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn invariant_newer_catalog_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.json");
    fs::write(&path, r#"{"engineMinVersion": "9.0.0", "items": []}"#).unwrap();

    let result = Catalog::load(&path);
    assert!(matches!(result, Err(CatalogError::EngineVersionMismatch(_, _))));
}

#[test]
fn invariant_sample_catalog_views() {
    let catalog = Catalog::sample().unwrap();
    assert_eq!(catalog.len(), 9);

    let featured: Vec<_> = catalog.featured().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(featured, vec!["1", "2", "5", "p1", "p2"]);

    let facets = catalog.facets();
    assert_eq!(facets.categories[0], "All");
    assert!(facets.categories.contains(&"Watercolors".to_string()));
    assert_eq!(facets.years, vec!["All", "2024", "2023"]);
}
