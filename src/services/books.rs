//! Book catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookData, BookId},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_books(&self) -> AppResult<Vec<Book>> {
        self.store.find_all().await
    }

    /// Absence is not an error here; the API layer decides what it means.
    pub async fn get_book_by_id(&self, id: BookId) -> AppResult<Option<Book>> {
        self.store.find_by_id(id).await
    }

    pub async fn get_books_by_genre(&self, genre: &str) -> AppResult<Vec<Book>> {
        self.store.find_by_genre(genre).await
    }

    pub async fn get_books_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        self.store.find_by_author(author).await
    }

    pub async fn get_books_by_availability_status(&self, available: bool) -> AppResult<Vec<Book>> {
        self.store.find_by_availability_status(available).await
    }

    /// Persist a new book; the store assigns its id
    pub async fn add_book(&self, data: BookData) -> AppResult<Book> {
        let book = self.store.save(None, &data).await?;
        tracing::info!(book_id = book.id, title = %book.data.title, "Book added");
        Ok(book)
    }

    /// Replace every field of an existing book except its id
    pub async fn update_book(&self, id: BookId, patch: BookData) -> AppResult<Book> {
        let Some(mut book) = self.store.find_by_id(id).await? else {
            tracing::warn!(book_id = id, "Update of unknown book");
            return Err(not_found(id));
        };

        book.data = patch;
        let book = self.store.save(Some(book.id), &book.data).await?;
        tracing::info!(book_id = book.id, "Book updated");
        Ok(book)
    }

    pub async fn delete_book(&self, id: BookId) -> AppResult<()> {
        if !self.store.exists_by_id(id).await? {
            tracing::warn!(book_id = id, "Delete of unknown book");
            return Err(not_found(id));
        }

        self.store.delete_by_id(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }

    /// Readiness probe for the backing store
    pub async fn check_store(&self) -> AppResult<()> {
        self.store.ping().await
    }
}

fn not_found(id: BookId) -> AppError {
    AppError::NotFound(format!("Book not found with id {}", id))
}
