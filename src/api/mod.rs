//! API handlers for the library catalog REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    middleware,
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{
    error::{self, AppError},
    AppState,
};

/// `axum::extract::Path` with rejections reported as [`AppError`]
pub struct Path<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) =
            axum::extract::Path::<T>::from_request_parts(parts, state).await?;
        Ok(Path(value))
    }
}

/// JSON body that has been deserialized and then checked with `validator`
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Greeting served at the site root
pub async fn home() -> &'static str {
    "Welcome to Our Library System!"
}

/// JSON 404 for paths that match no route
pub async fn route_not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::get_all_books))
        .route("/books/", get(books::get_all_books))
        .route("/books/create", post(books::add_book))
        .route(
            "/books/:id",
            get(books::get_book_by_id)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/books/genre/:genre", get(books::get_books_by_genre))
        .route("/books/author/:author", get(books::get_books_by_author))
        .route(
            "/books/availability/:flag",
            get(books::get_books_by_availability_status),
        )
        .with_state(state);

    Router::new()
        .route("/", get(home))
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(middleware::from_fn(error::attach_request_path)),
        )
}
