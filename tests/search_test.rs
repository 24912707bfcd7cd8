//! Integration tests for name search over the SQLite catalog.

mod helpers;

use std::sync::Arc;

use catalog_database::MemoryRowStore;
use catalog_entity::{CatalogRow, ItemKind};
use catalog_service::HierarchyResolver;

#[tokio::test]
async fn test_search_matches_substring_ignoring_case() {
    let catalog = helpers::TestCatalog::with_rows(&[
        CatalogRow::file("1", "/x/Movie.mkv", 1),
        CatalogRow::file("2", "/x/movement.txt", 1),
        CatalogRow::file("3", "/x/Document.pdf", 1),
    ])
    .await;

    let hits = catalog.resolver().search("mov").await.unwrap();
    let names: Vec<_> = hits.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Movie.mkv", "movement.txt"]);
}

#[tokio::test]
async fn test_search_orders_folders_first() {
    let catalog = helpers::TestCatalog::with_rows(&helpers::library()).await;
    let hits = catalog.resolver().search("i").await.unwrap();

    let first_file = hits
        .iter()
        .position(|e| e.kind == ItemKind::File)
        .unwrap_or(hits.len());
    assert!(hits[..first_file].iter().all(|e| e.is_folder()));
    assert!(hits[first_file..].iter().all(|e| !e.is_folder()));
}

#[tokio::test]
async fn test_unfiltered_search_excludes_deleted_rows() {
    let catalog = helpers::TestCatalog::with_rows(&helpers::library()).await;
    let hits = catalog.resolver().search("").await.unwrap();

    assert_eq!(hits.len(), 6);
    assert!(hits.iter().all(|e| e.id != "old"));
    assert!(hits.iter().all(|e| !e.synthesized));
}

#[tokio::test]
async fn test_search_returns_row_paths() {
    let catalog = helpers::TestCatalog::with_rows(&helpers::library()).await;
    let hits = catalog.resolver().search("ronin").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "/69/USER MARIO/Films/Ronin.mkv");
    assert_eq!(hits[0].size, 3_100_000_000);
}

#[tokio::test]
async fn test_browser_short_circuits_empty_query() {
    let catalog = helpers::TestCatalog::with_rows(&helpers::library()).await;
    assert!(catalog.browser("/").search("").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sqlite_and_memory_stores_fold_case_alike() {
    let rows = vec![
        CatalogRow::file("1", "/f/Amélie.mkv", 1),
        CatalogRow::file("2", "/f/ÉCOLE.txt", 1),
        CatalogRow::file("3", "/f/Amelie.mkv", 1),
        CatalogRow::file("4", "/f/100%_done.txt", 1),
    ];
    let sqlite = helpers::TestCatalog::with_rows(&rows).await.resolver();
    let memory = HierarchyResolver::new(Arc::new(rows.into_iter().collect::<MemoryRowStore>()));

    for query in ["AMÉLIE", "amélie", "école", "Amelie", "%_", "é"] {
        let from_sqlite: Vec<_> = sqlite
            .search(query)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        let from_memory: Vec<_> = memory
            .search(query)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(from_sqlite, from_memory, "stores disagree on {query:?}");
    }

    let hits = sqlite.search("AMÉLIE").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Amélie.mkv");
}
