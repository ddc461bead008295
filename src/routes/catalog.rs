//! Catalog browsing routes
//!
//! The landing page and the paginated letter listing.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::catalog::PageWindow;
use crate::db::BookRepository;
use crate::error::Result;
use crate::html;
use crate::state::AppState;

/// Books shown per listing page
const PAGE_SIZE: i64 = 10;

/// Create the catalog router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/byletter", get(by_letter))
}

/// Query parameters for the letter listing
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    /// Title prefix to filter on; empty matches every title
    #[serde(default)]
    pub letter: String,
    /// Window start, taken as text so garbled values fall back to 0
    pub offset: Option<String>,
}

impl ListingQuery {
    /// Parsed offset with fallback 0; negatives are clamped so the
    /// store never sees them
    pub fn offset(&self) -> i64 {
        self.offset
            .as_deref()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0)
            .max(0)
    }
}

/// Landing page
///
/// GET /
async fn index() -> Html<String> {
    Html(html::render_index())
}

/// Paginated listing of titles starting with a letter
///
/// GET /byletter?letter=A&offset=10
async fn by_letter(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>> {
    let offset = query.offset();

    let repo = BookRepository::new(state.db());
    let page = repo.list_by_letter(&query.letter, PAGE_SIZE, offset).await?;

    let view = html::ListingView {
        letter: &query.letter,
        books: &page.books,
        page: PageWindow::new(offset, PAGE_SIZE, page.total),
    };

    Ok(Html(html::render_listing(&view)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(offset: Option<&str>) -> ListingQuery {
        ListingQuery {
            letter: "A".to_string(),
            offset: offset.map(str::to_string),
        }
    }

    #[test]
    fn test_offset_defaults_to_zero() {
        assert_eq!(query(None).offset(), 0);
        assert_eq!(query(Some("")).offset(), 0);
        assert_eq!(query(Some("abc")).offset(), 0);
    }

    #[test]
    fn test_offset_parses_numbers() {
        assert_eq!(query(Some("20")).offset(), 20);
    }

    #[test]
    fn test_negative_offset_is_clamped() {
        assert_eq!(query(Some("-10")).offset(), 0);
    }
}
