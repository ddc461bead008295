//! HTTP route modules

pub mod books;
pub mod catalog;
pub mod health;
pub mod reviews;

use axum::Router;

use crate::state::AppState;

/// Assemble the full application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(books::router())
        .merge(reviews::router())
        .merge(health::router())
}
