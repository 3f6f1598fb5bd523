//! Server-rendered HTML pages.
//!
//! Text fields are escaped once, when a form is sanitized, and stored that
//! way. Record text is therefore emitted with [`stored`] instead of being
//! escaped a second time; everything else goes through maud's escaping.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod errors;
pub mod genres;
pub mod index;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::{models::Book, validation::FormErrors};

/// Text that was escaped when it was sanitized
pub fn stored(text: &str) -> PreEscaped<&str> {
    PreEscaped(text)
}

/// Base layout with the catalog sidebar. `title` may carry stored text.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (stored(title)) " | Local Library" }
            }
            body {
                nav.sidebar {
                    ul {
                        li { a href="/catalog" { "Home" } }
                        li { a href="/catalog/books" { "All books" } }
                        li { a href="/catalog/authors" { "All authors" } }
                        li { a href="/catalog/genres" { "All genres" } }
                        li { a href="/catalog/bookinstances" { "All book-instances" } }
                    }
                    hr;
                    ul {
                        li { a href="/catalog/author/create" { "Create new author" } }
                        li { a href="/catalog/genre/create" { "Create new genre" } }
                        li { a href="/catalog/book/create" { "Create new book" } }
                        li { a href="/catalog/bookinstance/create" { "Create new book instance (copy)" } }
                    }
                }
                main.content {
                    h1 { (stored(title)) }
                    (content)
                }
            }
        }
    }
}

/// Field errors of a rejected submission
pub fn form_errors(errors: &FormErrors) -> Markup {
    html! {
        @if !errors.is_empty() {
            ul.errors {
                @for error in errors.iter() {
                    li data-field=(error.field) { (error.message) }
                }
            }
        }
    }
}

/// Titles linking to each book, with their summaries
pub fn book_summaries(books: &[Book]) -> Markup {
    html! {
        dl {
            @for book in books {
                dt { a href=(book.url()) { (stored(&book.title)) } }
                dd { (stored(&book.summary)) }
            }
        }
    }
}
