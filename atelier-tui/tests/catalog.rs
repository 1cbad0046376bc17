mod common;

use atelier_grid::{SortOrder, SortState};
use atelier_tui::catalog::{
    seed_if_empty, CatalogError, CatalogRepository, Course, ListQuery, Product, SqliteCatalog,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use common::seeded_catalog;

fn felt_hat() -> Product {
    Product {
        id: 0,
        name: "Felt Cloche".into(),
        collection: "Winter".into(),
        price: Decimal::new(6_400, 2),
        stock: 4,
        active: true,
    }
}

#[tokio::test]
async fn seeding_fills_empty_tables_once() {
    let catalog = SqliteCatalog::in_memory().await.unwrap();
    seed_if_empty(&catalog).await.unwrap();
    seed_if_empty(&catalog).await.unwrap();

    let all = ListQuery::default();
    assert_eq!(CatalogRepository::<Course>::count(&catalog, &all).await.unwrap(), 42);
    assert_eq!(CatalogRepository::<Product>::count(&catalog, &all).await.unwrap(), 60);
}

#[tokio::test]
async fn list_page_reports_pagination() {
    let catalog = seeded_catalog().await;

    let first = CatalogRepository::<Course>::list_page(&*catalog, &ListQuery::new(1, 10))
        .await
        .unwrap();
    assert_eq!(first.records.len(), 10);
    assert_eq!(first.records[0].id, 1);
    assert_eq!(first.pagination.total_count, 42);
    assert_eq!(first.pagination.total_pages, 5);
    assert!(first.pagination.has_next_page);
    assert!(!first.pagination.has_prev_page);

    let last = CatalogRepository::<Course>::list_page(&*catalog, &ListQuery::new(5, 10))
        .await
        .unwrap();
    assert_eq!(last.records.len(), 2);
    assert_eq!(last.records[0].id, 41);
    assert!(!last.pagination.has_next_page);
    assert!(last.pagination.has_prev_page);
}

#[tokio::test]
async fn search_is_case_insensitive_across_text_columns() {
    let catalog = seeded_catalog().await;

    let query = ListQuery::new(1, 50).search("SILK");
    let scarves = CatalogRepository::<Product>::find(&*catalog, &query)
        .await
        .unwrap();
    assert_eq!(scarves.len(), 5);
    assert!(scarves.iter().all(|p| p.name.ends_with("Silk Scarf")));

    let winter = ListQuery::new(1, 50).search("winter");
    assert_eq!(CatalogRepository::<Product>::count(&*catalog, &winter).await.unwrap(), 12);
}

#[tokio::test]
async fn wildcards_in_search_match_literally() {
    let catalog = seeded_catalog().await;
    let query = ListQuery::new(1, 10).search("%");
    assert_eq!(CatalogRepository::<Product>::count(&*catalog, &query).await.unwrap(), 0);
}

#[tokio::test]
async fn sort_orders_by_the_requested_column() {
    let catalog = seeded_catalog().await;

    let query = ListQuery::new(1, 3).sort(SortState::by("price", SortOrder::Desc));
    let priciest = CatalogRepository::<Product>::find(&*catalog, &query)
        .await
        .unwrap();
    assert_eq!(priciest[0].name, "Atelier Knit Beanie");
    assert_eq!(priciest[0].price, Decimal::new(22_200, 2));
    assert!(priciest.windows(2).all(|w| w[0].price >= w[1].price));

    let query = ListQuery::new(1, 1).sort(SortState::by("title", SortOrder::Desc));
    let last_title = CatalogRepository::<Course>::find(&*catalog, &query)
        .await
        .unwrap();
    assert_eq!(last_title[0].title, "Weaving Basics 3");
}

#[tokio::test]
async fn unsortable_column_is_an_error() {
    let catalog = seeded_catalog().await;
    let query = ListQuery::new(1, 10).sort(SortState::by("active", SortOrder::Asc));
    let result = CatalogRepository::<Product>::find(&*catalog, &query).await;
    assert!(matches!(result, Err(CatalogError::InvalidSort(key)) if key == "active"));
}

#[tokio::test]
async fn create_update_and_destroy() {
    let catalog = seeded_catalog().await;

    let created = catalog.create(&felt_hat()).await.unwrap();
    assert_eq!(created.id, 61);
    assert_eq!(created.price, Decimal::new(6_400, 2));

    let mut changed = created.clone();
    changed.stock = 0;
    changed.active = false;
    catalog.update(&changed).await.unwrap();
    let stored = CatalogRepository::<Product>::get(&*catalog, 61).await.unwrap();
    assert_eq!(stored, Some(changed));

    CatalogRepository::<Product>::destroy(&*catalog, 61).await.unwrap();
    let gone = CatalogRepository::<Product>::get(&*catalog, 61).await.unwrap();
    assert_eq!(gone, None);
}

#[tokio::test]
async fn missing_records_are_not_found() {
    let catalog = seeded_catalog().await;

    let ghost = Course {
        id: 999,
        title: "Ghost".into(),
        category: "None".into(),
        level: "Beginner".into(),
        price: Decimal::ZERO,
        seats: 1,
        starts_on: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        published: false,
    };
    assert!(matches!(
        catalog.update(&ghost).await,
        Err(CatalogError::NotFound { entity: "course", id: 999 })
    ));
    assert!(matches!(
        CatalogRepository::<Course>::destroy(&*catalog, 999).await,
        Err(CatalogError::NotFound { id: 999, .. })
    ));
}
