use super::*;
use crate::schema::{self, FieldValue};

fn blog(title: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert("title".into(), FieldValue::Text(title.into()));
    fields
}

#[tokio::test]
async fn insert_assigns_sequential_ids() {
    let store = MemStore::new();
    let a = store.insert(&schema::BLOGS, blog("A"), None).await.unwrap();
    let b = store.insert(&schema::BLOGS, blog("B"), None).await.unwrap();
    assert_eq!(a[0].id, 1);
    assert_eq!(b[0].id, 2);
}

#[tokio::test]
async fn list_orders_by_position_with_nulls_last() {
    let store = MemStore::new();
    store.insert(&schema::BLOGS, blog("unpositioned"), None).await.unwrap();
    store.insert(&schema::BLOGS, blog("second"), Some(2)).await.unwrap();
    store.insert(&schema::BLOGS, blog("first"), Some(1)).await.unwrap();

    let rows = store.list(&schema::BLOGS).await.unwrap();
    let titles: Vec<&str> = rows.iter().map(|row| row.text("title")).collect();
    assert_eq!(titles, ["first", "second", "unpositioned"]);
}

#[tokio::test]
async fn tables_are_isolated() {
    let store = MemStore::new();
    store.insert(&schema::BLOGS, blog("A"), None).await.unwrap();
    assert!(store.list(&schema::AWARDS).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_matching_row_or_reports_not_found() {
    let store = MemStore::new();
    let mut row = store.insert(&schema::BLOGS, blog("A"), Some(1)).await.unwrap().remove(0);
    row.fields.insert("title".into(), FieldValue::Text("A2".into()));
    store.update(&schema::BLOGS, &row).await.unwrap();
    assert_eq!(store.list(&schema::BLOGS).await.unwrap()[0].text("title"), "A2");

    row.id = 99;
    assert!(matches!(
        store.update(&schema::BLOGS, &row).await,
        Err(StoreError::NotFound(99))
    ));
}

#[tokio::test]
async fn delete_removes_row_or_reports_not_found() {
    let store = MemStore::new();
    let id = store.insert(&schema::BLOGS, blog("A"), None).await.unwrap()[0].id;
    store.delete(&schema::BLOGS, id).await.unwrap();
    assert!(store.list(&schema::BLOGS).await.unwrap().is_empty());
    assert!(matches!(
        store.delete(&schema::BLOGS, id).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn upsert_positions_sets_known_ids_and_skips_unknown() {
    let store = MemStore::new();
    let a = store.insert(&schema::BLOGS, blog("A"), Some(1)).await.unwrap()[0].id;
    let b = store.insert(&schema::BLOGS, blog("B"), Some(2)).await.unwrap()[0].id;

    store
        .upsert_positions(&schema::BLOGS, &[(b, 1), (a, 2), (99, 3)])
        .await
        .unwrap();

    let rows = store.list(&schema::BLOGS).await.unwrap();
    let order: Vec<(i64, Option<i32>)> = rows.iter().map(|row| (row.id, row.position)).collect();
    assert_eq!(order, [(b, Some(1)), (a, Some(2))]);
}
