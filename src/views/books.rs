//! Book pages

use maud::{html, Markup};

use super::{form_errors, page, stored};
use crate::{
    models::{Book, BookForm, BookInstance, BookStatus},
    services::books::{BookDetail, BookFormOptions, BookListing},
    validation::FormErrors,
};

pub fn list_page(books: &[BookListing]) -> Markup {
    page(
        "Book List",
        html! {
            @if books.is_empty() {
                p { "There are no books." }
            } @else {
                ul {
                    @for listing in books {
                        li {
                            a href=(listing.book.url()) { (stored(&listing.book.title)) }
                            @if let Some(author) = &listing.author {
                                " (" (stored(&author.name())) ")"
                            }
                        }
                    }
                }
            }
        },
    )
}

/// CSS class of a copy's status label
fn status_class(status: BookStatus) -> &'static str {
    match status {
        BookStatus::Available => "text-success",
        BookStatus::Maintenance => "text-danger",
        BookStatus::Loaned | BookStatus::Reserved => "text-warning",
    }
}

/// Copies of a book with their status and due date
fn copies(instances: &[BookInstance]) -> Markup {
    html! {
        @for instance in instances {
            div.copy {
                p class=(status_class(instance.status)) { (instance.status.as_str()) }
                p { strong { "Imprint: " } (stored(&instance.imprint)) }
                @if instance.status != BookStatus::Available {
                    p { strong { "Due back: " } (instance.due_back_formatted()) }
                }
                p {
                    strong { "Id: " }
                    a href=(instance.url()) { (instance.id.to_string()) }
                }
            }
        }
    }
}

pub fn detail_page(detail: &BookDetail) -> Markup {
    let BookDetail {
        book,
        author,
        genres,
        instances,
    } = detail;
    page(
        &format!("Title: {}", book.title),
        html! {
            p { strong { "Author: " } a href=(author.url()) { (stored(&author.name())) } }
            p { strong { "Summary: " } (stored(&book.summary)) }
            p { strong { "ISBN: " } (stored(&book.isbn)) }
            p {
                strong { "Genre: " }
                @for (i, genre) in genres.iter().enumerate() {
                    @if i > 0 { ", " }
                    a href=(genre.url()) { (stored(&genre.name)) }
                }
            }
            h2 { "Copies" }
            @if instances.is_empty() {
                p { "There are no copies of this book in the library." }
            } @else {
                (copies(instances))
            }
            hr;
            p { a href={ (book.url()) "/delete" } { "Delete Book" } }
            p { a href={ (book.url()) "/update" } { "Update Book" } }
        },
    )
}

pub fn form_page(
    title: &str,
    form: &BookForm,
    options: &BookFormOptions,
    errors: &FormErrors,
) -> Markup {
    page(
        title,
        html! {
            form method="post" {
                div.form-group {
                    label for="title" { "Title:" }
                    input #title type="text" name="title" placeholder="Name of book"
                        value=(stored(&form.title));
                }
                div.form-group {
                    label for="author" { "Author:" }
                    select #author name="author" {
                        option value="" { "--Please select an author--" }
                        @for author in &options.authors {
                            @let id = author.id.to_string();
                            option value=(id) selected[form.author == id] { (stored(&author.name())) }
                        }
                    }
                }
                div.form-group {
                    label for="summary" { "Summary:" }
                    textarea #summary name="summary" placeholder="Summary" { (stored(&form.summary)) }
                }
                div.form-group {
                    label for="isbn" { "ISBN:" }
                    input #isbn type="text" name="isbn" placeholder="ISBN13"
                        value=(stored(&form.isbn));
                }
                fieldset.form-group {
                    legend { "Genre:" }
                    @for choice in &options.genres {
                        @let id = choice.genre.id.to_string();
                        div.checkbox {
                            input type="checkbox" name="genre" id=(id) value=(id) checked[choice.checked];
                            label for=(id) { (stored(&choice.genre.name)) }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
            (form_errors(errors))
        },
    )
}

/// Confirmation page; the delete button is withheld while copies remain
pub fn delete_page(book: &Book, instances: &[BookInstance]) -> Markup {
    page(
        &format!("Delete Book: {}", book.title),
        html! {
            p { strong { "Summary: " } (stored(&book.summary)) }
            p { strong { "ISBN: " } (stored(&book.isbn)) }
            @if instances.is_empty() {
                p { "Do you really want to delete this Book?" }
                form method="post" {
                    input type="hidden" name="bookid" value=(book.id.to_string());
                    button type="submit" { "Delete" }
                }
            } @else {
                p { strong { "Delete the following copies before attempting to delete this book." } }
                h2 { "Copies" }
                (copies(instances))
            }
        },
    )
}
