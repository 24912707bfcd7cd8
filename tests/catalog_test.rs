//! Integration tests for directory listing over the SQLite catalog.

mod helpers;

use catalog_core::error::ErrorKind;
use catalog_entity::{CatalogRow, ItemKind};

fn names(entries: &[catalog_entity::DirectoryEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[tokio::test]
async fn test_list_user_root() {
    let catalog = helpers::TestCatalog::with_rows(&helpers::library()).await;
    let entries = catalog
        .resolver()
        .list_children("/69/USER MARIO")
        .await
        .unwrap();

    assert_eq!(names(&entries), ["Films", "Series", "notes.txt"]);
    assert_eq!(entries[0].id, "films");
    assert!(!entries[0].synthesized);
    assert!(entries[1].synthesized);
    assert_eq!(entries[1].path, "/69/USER MARIO/Series");
    assert_eq!(entries[2].kind, ItemKind::File);
    assert_eq!(entries[2].size, 120);
}

#[tokio::test]
async fn test_root_listing() {
    let catalog = helpers::TestCatalog::with_rows(&helpers::library()).await;
    let entries = catalog.resolver().list_children("/").await.unwrap();
    assert_eq!(names(&entries), ["69"]);
    assert_eq!(entries[0].id, "root-69");
}

#[tokio::test]
async fn test_listing_keeps_tombstoned_rows() {
    let catalog = helpers::TestCatalog::with_rows(&helpers::library()).await;
    let entries = catalog
        .resolver()
        .list_children("/69/USER MARIO/Films")
        .await
        .unwrap();
    assert_eq!(names(&entries), ["Heat (1995).mkv", "Old Movie.avi", "Ronin.mkv"]);
}

#[tokio::test]
async fn test_prefix_is_case_sensitive_and_literal() {
    let catalog = helpers::TestCatalog::with_rows(&[
        CatalogRow::file("upper", "/Movies/a.mkv", 1),
        CatalogRow::file("lower", "/movies/b.mkv", 1),
        CatalogRow::file("wild", "/Mo_ies/c.mkv", 1),
    ])
    .await;
    let entries = catalog.resolver().list_children("/Movies").await.unwrap();
    assert_eq!(names(&entries), ["a.mkv"]);
}

#[tokio::test]
async fn test_deep_synthesis_chain() {
    let catalog =
        helpers::TestCatalog::with_rows(&[CatalogRow::file("z", "/a/x/y/z", 3)]).await;
    let resolver = catalog.resolver();

    let a = resolver.list_children("/a").await.unwrap();
    assert_eq!(names(&a), ["x"]);
    assert!(a[0].synthesized);

    let x = resolver.list_children("/a/x").await.unwrap();
    assert_eq!(names(&x), ["y"]);
    assert_eq!(x[0].kind, ItemKind::Folder);

    assert_ne!(a[0].id, x[0].id);
}

#[tokio::test]
async fn test_listing_is_stable_across_calls() {
    let catalog = helpers::TestCatalog::with_rows(&helpers::library()).await;
    let resolver = catalog.resolver();
    let first = resolver.list_children("/69/USER MARIO").await.unwrap();
    let second = resolver.list_children("/69/USER MARIO").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_conflicting_rows_report_integrity_error() {
    let catalog = helpers::TestCatalog::with_rows(&[
        CatalogRow::folder("a", "/dup"),
        CatalogRow::file("b", "/dup", 5),
    ])
    .await;
    let err = catalog.resolver().list_children("/").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Integrity);
}

#[tokio::test]
async fn test_browser_diagnostics_on_empty_listing() {
    let catalog = helpers::TestCatalog::with_rows(&helpers::library()).await;
    catalog.items.set_version("v42").await.unwrap();

    let listing = catalog.browser("/nope").open(None).await.unwrap();
    assert!(listing.entries.is_empty());
    let stats = listing.diagnostics.expect("diagnostics");
    assert_eq!(stats.total_items, 7);
    assert_eq!(stats.sample_paths.len(), 5);
    assert_eq!(stats.version.as_deref(), Some("v42"));
}

#[tokio::test]
async fn test_open_seeded_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();

    let seed_config = helpers::file_config(&dir.path().join("assets"), None);
    let seed_db = catalog_database::DatabasePool::open(&seed_config)
        .await
        .unwrap();
    catalog_database::ItemRepository::new(seed_db.pool().clone())
        .upsert_many(&helpers::library())
        .await
        .unwrap();
    seed_db.close().await;

    let seed_path = std::path::PathBuf::from(&seed_config.path);
    let config = helpers::file_config(&dir.path().join("data"), Some(&seed_path));
    let db = catalog_database::DatabasePool::open(&config).await.unwrap();
    let items = std::sync::Arc::new(catalog_database::ItemRepository::new(db.into_pool()));
    let resolver = catalog_service::HierarchyResolver::new(items);

    let entries = resolver.list_children("/69").await.unwrap();
    assert_eq!(names(&entries), ["USER MARIO"]);
}
