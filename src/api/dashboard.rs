//! Catalog home page

use axum::extract::State;
use maud::Markup;

use crate::{views, AppState};

/// Counts that fail to load leave the page up with an error notice
pub async fn index(State(state): State<AppState>) -> Markup {
    match state.services.dashboard.counts().await {
        Ok(counts) => views::index::dashboard_page(Some(&counts)),
        Err(e) => {
            tracing::error!("Failed to load catalog counts: {}", e);
            views::index::dashboard_page(None)
        }
    }
}
