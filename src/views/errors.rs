//! Error pages

use axum::http::StatusCode;
use maud::{html, Markup};

use super::page;

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");
    page(
        title,
        html! {
            p.status { (status.as_u16()) }
            p.message { (message) }
            p { a href="/catalog" { "Back to the catalog" } }
        },
    )
}
