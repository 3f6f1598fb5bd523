//! Author pages

use maud::{html, Markup};

use super::{book_summaries, form_errors, page, stored};
use crate::{
    models::{Author, AuthorForm, Book},
    validation::FormErrors,
};

pub fn list_page(authors: &[Author]) -> Markup {
    page(
        "Author List",
        html! {
            @if authors.is_empty() {
                p { "There are no authors." }
            } @else {
                ul {
                    @for author in authors {
                        li {
                            a href=(author.url()) { (stored(&author.name())) }
                            " (" (author.lifespan()) ")"
                        }
                    }
                }
            }
        },
    )
}

pub fn detail_page(author: &Author, books: &[Book]) -> Markup {
    page(
        &format!("Author: {}", author.name()),
        html! {
            p { (author.lifespan()) }
            h2 { "Books" }
            @if books.is_empty() {
                p { "This author has no books." }
            } @else {
                (book_summaries(books))
            }
            hr;
            p { a href={ (author.url()) "/delete" } { "Delete author" } }
            p { a href={ (author.url()) "/update" } { "Update author" } }
        },
    )
}

pub fn form_page(title: &str, form: &AuthorForm, errors: &FormErrors) -> Markup {
    page(
        title,
        html! {
            form method="post" {
                div.form-group {
                    label for="first_name" { "First Name:" }
                    input #first_name type="text" name="first_name" maxlength="100"
                        placeholder="First name" value=(stored(&form.first_name));
                    label for="family_name" { "Family Name:" }
                    input #family_name type="text" name="family_name" maxlength="100"
                        placeholder="Family name" value=(stored(&form.family_name));
                }
                div.form-group {
                    label for="date_of_birth" { "Date of birth:" }
                    input #date_of_birth type="date" name="date_of_birth"
                        value=(stored(&form.date_of_birth));
                }
                div.form-group {
                    label for="date_of_death" { "Date of death:" }
                    input #date_of_death type="date" name="date_of_death"
                        value=(stored(&form.date_of_death));
                }
                button type="submit" { "Submit" }
            }
            (form_errors(errors))
        },
    )
}

/// Confirmation page; the delete button is withheld while books remain
pub fn delete_page(author: &Author, books: &[Book]) -> Markup {
    page(
        &format!("Delete Author: {}", author.name()),
        html! {
            p { (author.lifespan()) }
            @if books.is_empty() {
                p { "Do you really want to delete this Author?" }
                form method="post" {
                    input type="hidden" name="authorid" value=(author.id.to_string());
                    button type="submit" { "Delete" }
                }
            } @else {
                p { strong { "Delete the following books before attempting to delete this author." } }
                h2 { "Books" }
                (book_summaries(books))
            }
        },
    )
}
