//! Genre pages

use maud::{html, Markup};

use super::{book_summaries, form_errors, page, stored};
use crate::{
    models::{Book, Genre, GenreForm},
    validation::FormErrors,
};

pub fn list_page(genres: &[Genre]) -> Markup {
    page(
        "Genre List",
        html! {
            @if genres.is_empty() {
                p { "There are no genres." }
            } @else {
                ul {
                    @for genre in genres {
                        li { a href=(genre.url()) { (stored(&genre.name)) } }
                    }
                }
            }
        },
    )
}

pub fn detail_page(genre: &Genre, books: &[Book]) -> Markup {
    page(
        &format!("Genre: {}", genre.name),
        html! {
            h2 { "Books" }
            @if books.is_empty() {
                p { "This genre has no books." }
            } @else {
                (book_summaries(books))
            }
            hr;
            p { a href={ (genre.url()) "/delete" } { "Delete genre" } }
            p { a href={ (genre.url()) "/update" } { "Update genre" } }
        },
    )
}

pub fn form_page(title: &str, form: &GenreForm, errors: &FormErrors) -> Markup {
    page(
        title,
        html! {
            form method="post" {
                div.form-group {
                    label for="name" { "Genre:" }
                    input #name type="text" name="name" placeholder="Fantasy, Poetry etc."
                        value=(stored(&form.name));
                }
                button type="submit" { "Submit" }
            }
            (form_errors(errors))
        },
    )
}

pub fn delete_page(genre: &Genre, books: &[Book]) -> Markup {
    page(
        &format!("Delete Genre: {}", genre.name),
        html! {
            @if books.is_empty() {
                p { "Do you really want to delete this Genre?" }
                form method="post" {
                    input type="hidden" name="genreid" value=(genre.id.to_string());
                    button type="submit" { "Delete" }
                }
            } @else {
                p { strong { "Delete the following books before attempting to delete this genre." } }
                h2 { "Books" }
                (book_summaries(books))
            }
        },
    )
}
