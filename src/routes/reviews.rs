//! Review proxy route

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};

use crate::error::Result;
use crate::html;
use crate::state::AppState;

/// Create the review proxy router
pub fn router() -> Router<AppState> {
    Router::new().route("/bookReview/:book_name", get(book_review))
}

/// Proxied reviews for a title
///
/// GET /bookReview/:book_name
async fn book_review(
    State(state): State<AppState>,
    Path(book_name): Path<String>,
) -> Result<Html<String>> {
    let feed = state.reviews().fetch_reviews(&book_name).await?;
    Ok(Html(html::render_reviews(&book_name, &feed)))
}
