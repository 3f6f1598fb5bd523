//! Catalog home page

use maud::{html, Markup};

use super::page;
use crate::services::dashboard::CatalogCounts;

/// `None` means the counts could not be loaded
pub fn dashboard_page(counts: Option<&CatalogCounts>) -> Markup {
    page(
        "Local Library Home",
        html! {
            p { "Welcome to the Local Library catalog." }
            h2 { "Dynamic content" }
            @match counts {
                Some(counts) => {
                    p { "The library has the following record counts:" }
                    ul.counts {
                        li { strong { "Books: " } (counts.books) }
                        li { strong { "Copies: " } (counts.book_instances) }
                        li { strong { "Copies available: " } (counts.book_instances_available) }
                        li { strong { "Authors: " } (counts.authors) }
                        li { strong { "Genres: " } (counts.genres) }
                    }
                }
                None => {
                    p.error { "Error loading catalog counts." }
                }
            }
        },
    )
}
