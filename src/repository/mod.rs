//! Repository layer for book persistence

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Book, BookData, BookId},
};

pub use books::PgBookStore;
pub use memory::InMemoryBookStore;

/// Keyed collection of book records.
///
/// Storage failures surface as `AppError::Database`, never as `NotFound`,
/// except for `save` with an id that no longer exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, in no guaranteed order
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: BookId) -> AppResult<Option<Book>>;

    /// Exact, case-sensitive genre match
    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Book>>;

    /// Exact, case-sensitive author match
    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Book>>;

    async fn find_by_availability_status(&self, available: bool) -> AppResult<Vec<Book>>;

    /// Insert a new record when `id` is `None`, otherwise overwrite the
    /// existing one. Ids are only ever assigned here.
    async fn save(&self, id: Option<BookId>, data: &BookData) -> AppResult<Book>;

    async fn exists_by_id(&self, id: BookId) -> AppResult<bool>;

    /// Remove a record. Absent ids are ignored; callers check existence first.
    async fn delete_by_id(&self, id: BookId) -> AppResult<()>;

    /// Check that the backing storage is reachable
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
