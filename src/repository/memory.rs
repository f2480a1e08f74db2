//! In-process book store, for tests and the `memory` storage backend

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookData, BookId},
};

#[derive(Default)]
struct Inner {
    last_id: BookId,
    books: BTreeMap<BookId, Book>,
}

#[derive(Default)]
pub struct InMemoryBookStore {
    inner: RwLock<Inner>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Book>
    where
        F: Fn(&BookData) -> bool,
    {
        self.inner
            .read()
            .await
            .books
            .values()
            .filter(|book| predicate(&book.data))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.filter(|_| true).await)
    }

    async fn find_by_id(&self, id: BookId) -> AppResult<Option<Book>> {
        Ok(self.inner.read().await.books.get(&id).cloned())
    }

    async fn find_by_genre(&self, genre: &str) -> AppResult<Vec<Book>> {
        Ok(self.filter(|b| b.genre.as_deref() == Some(genre)).await)
    }

    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        Ok(self.filter(|b| b.author == author).await)
    }

    async fn find_by_availability_status(&self, available: bool) -> AppResult<Vec<Book>> {
        Ok(self.filter(|b| b.availability_status == available).await)
    }

    async fn save(&self, id: Option<BookId>, data: &BookData) -> AppResult<Book> {
        let mut inner = self.inner.write().await;
        let id = match id {
            Some(id) if inner.books.contains_key(&id) => id,
            Some(id) => return Err(AppError::NotFound(format!("Book not found with id {}", id))),
            None => {
                inner.last_id += 1;
                inner.last_id
            }
        };
        let book = Book::new(id, data.clone());
        inner.books.insert(id, book.clone());
        Ok(book)
    }

    async fn exists_by_id(&self, id: BookId) -> AppResult<bool> {
        Ok(self.inner.read().await.books.contains_key(&id))
    }

    async fn delete_by_id(&self, id: BookId) -> AppResult<()> {
        self.inner.write().await.books.remove(&id);
        Ok(())
    }
}
