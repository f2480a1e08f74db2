//! Library Catalog
//!
//! A REST JSON API for managing a catalog of books, backed by PostgreSQL
//! or an in-process store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(store: Arc<dyn repository::BookStore>) -> Self {
        Self {
            services: Arc::new(services::Services::new(store)),
        }
    }
}
