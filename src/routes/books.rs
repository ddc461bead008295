//! Book detail route
//!
//! One fetch of the full record, then an explicit dispatch on the
//! negotiated media type. JSON consumers get the raw pipe-delimited
//! authors and genres; HTML consumers get the normalized display
//! projection.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::catalog::BookDisplay;
use crate::db::{Book, BookRepository};
use crate::error::Result;
use crate::html;
use crate::negotiate::{self, MediaType};
use crate::state::AppState;

/// Create the book detail router
pub fn router() -> Router<AppState> {
    Router::new().route("/book/:book_id", get(book_detail))
}

/// JSON projection of a book: delimiters left raw, description
/// included, image URL omitted
#[derive(Debug, Serialize)]
pub struct BookJson {
    pub book_id: String,
    pub title: String,
    pub authors: String,
    pub description: String,
    pub pages: i32,
    pub rating: f64,
    pub rating_count: i64,
    pub genres: String,
}

impl From<Book> for BookJson {
    fn from(book: Book) -> Self {
        Self {
            book_id: book.book_id,
            title: book.title,
            authors: book.authors,
            description: book.description,
            pages: book.pages,
            rating: book.rating,
            rating_count: book.rating_count,
            genres: book.genres,
        }
    }
}

/// Book detail, negotiated between HTML and JSON
///
/// GET /book/:book_id
async fn book_detail(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let repo = BookRepository::new(state.db());
    let book = repo.get_by_id(&book_id).await?;

    let response = match negotiate::resolve(&headers) {
        MediaType::Json => Json(BookJson::from(book)).into_response(),
        MediaType::Html => {
            let display = BookDisplay::from_book(&book);
            Html(html::render_book(&display)).into_response()
        }
    };

    Ok(response)
}
