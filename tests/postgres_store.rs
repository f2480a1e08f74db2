//! PostgreSQL store tests
//!
//! Require a reachable database: `DATABASE_URL=... cargo test -- --ignored`

use chrono::NaiveDate;
use sqlx::PgPool;

use library_catalog::{
    models::BookData,
    repository::{BookStore, PgBookStore},
    AppError,
};

fn book(title: &str, author: &str, genre: Option<&str>, available: bool) -> BookData {
    BookData {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.map(str::to_string),
        publication_date: NaiveDate::from_ymd_opt(1965, 1, 1),
        availability_status: available,
        summary: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_save_assigns_id_and_finds_by_id(pool: PgPool) {
    let store = PgBookStore::new(pool);

    let saved = store.save(None, &book("Dune", "Herbert", Some("SciFi"), true)).await.unwrap();
    let found = store.find_by_id(saved.id).await.unwrap();

    assert_eq!(found, Some(saved.clone()));
    assert!(store.exists_by_id(saved.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_save_existing_overwrites_row(pool: PgPool) {
    let store = PgBookStore::new(pool);
    let saved = store.save(None, &book("Dune", "Herbert", Some("SciFi"), true)).await.unwrap();

    let patch = book("Dune Messiah", "Herbert", None, false);
    let updated = store.save(Some(saved.id), &patch).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.data, patch);
    assert_eq!(store.find_all().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_save_unknown_id_is_not_found(pool: PgPool) {
    let store = PgBookStore::new(pool);
    let err = store.save(Some(12345), &book("Ghost", "Nobody", None, true)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_filters(pool: PgPool) {
    let store = PgBookStore::new(pool);
    store.save(None, &book("Dune", "Herbert", Some("SciFi"), true)).await.unwrap();
    store.save(None, &book("Emma", "Austen", Some("Romance"), false)).await.unwrap();
    store.save(None, &book("Persuasion", "Austen", Some("Romance"), true)).await.unwrap();

    assert_eq!(store.find_by_genre("Romance").await.unwrap().len(), 2);
    assert!(store.find_by_genre("romance").await.unwrap().is_empty());
    assert_eq!(store.find_by_author("Herbert").await.unwrap().len(), 1);

    let unavailable = store.find_by_availability_status(false).await.unwrap();
    assert_eq!(unavailable.len(), 1);
    assert_eq!(unavailable[0].data.title, "Emma");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_delete_by_id(pool: PgPool) {
    let store = PgBookStore::new(pool);
    let saved = store.save(None, &book("Dune", "Herbert", None, true)).await.unwrap();

    store.delete_by_id(saved.id).await.unwrap();
    assert!(!store.exists_by_id(saved.id).await.unwrap());
    // Absent ids are ignored
    store.delete_by_id(saved.id).await.unwrap();
    store.ping().await.unwrap();
}
