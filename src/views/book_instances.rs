//! Book instance (copy) pages

use maud::{html, Markup};

use super::{form_errors, page, stored};
use crate::{
    models::{Book, BookInstance, BookInstanceForm, BookStatus},
    validation::FormErrors,
};

pub fn list_page(instances: &[(BookInstance, Option<Book>)]) -> Markup {
    page(
        "Book Instance List",
        html! {
            @if instances.is_empty() {
                p { "There are no book copies in this library." }
            } @else {
                ul {
                    @for (instance, book) in instances {
                        li {
                            a href=(instance.url()) {
                                @match book {
                                    Some(book) => { (stored(&book.title)) }
                                    None => { "Unknown book" }
                                }
                                " : " (stored(&instance.imprint))
                            }
                            " - " span.status { (instance.status.as_str()) }
                            @if instance.status != BookStatus::Available {
                                span { " (Due: " (instance.due_back_formatted()) ")" }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn summary(instance: &BookInstance, book: &Book) -> Markup {
    html! {
        p { strong { "Title: " } a href=(book.url()) { (stored(&book.title)) } }
        p { strong { "Imprint: " } (stored(&instance.imprint)) }
        p { strong { "Status: " } (instance.status.as_str()) }
        @if instance.status != BookStatus::Available {
            p { strong { "Due back: " } (instance.due_back_formatted()) }
        }
    }
}

pub fn detail_page(instance: &BookInstance, book: &Book) -> Markup {
    page(
        &format!("ID: {}", instance.id),
        html! {
            (summary(instance, book))
            hr;
            p { a href={ (instance.url()) "/delete" } { "Delete BookInstance" } }
            p { a href={ (instance.url()) "/update" } { "Update BookInstance" } }
        },
    )
}

pub fn form_page(
    title: &str,
    form: &BookInstanceForm,
    books: &[Book],
    errors: &FormErrors,
) -> Markup {
    page(
        title,
        html! {
            form method="post" {
                div.form-group {
                    label for="book" { "Book:" }
                    select #book name="book" {
                        option value="" { "--Please select a book--" }
                        @for book in books {
                            @let id = book.id.to_string();
                            option value=(id) selected[form.book == id] { (stored(&book.title)) }
                        }
                    }
                }
                div.form-group {
                    label for="imprint" { "Imprint:" }
                    input #imprint type="text" name="imprint" placeholder="Publisher and date information"
                        value=(stored(&form.imprint));
                }
                div.form-group {
                    label for="due_back" { "Date when book available:" }
                    input #due_back type="date" name="due_back" value=(stored(&form.due_back));
                }
                div.form-group {
                    label for="status" { "Status:" }
                    select #status name="status" {
                        @for status in BookStatus::ALL {
                            option value=(status.as_str()) selected[form.status == status.as_str()] {
                                (status.as_str())
                            }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
            (form_errors(errors))
        },
    )
}

pub fn delete_page(instance: &BookInstance, book: &Book) -> Markup {
    page(
        &format!("Delete BookInstance: {}", instance.id),
        html! {
            (summary(instance, book))
            p { "Do you really want to delete this BookInstance?" }
            form method="post" {
                input type="hidden" name="bookinstanceid" value=(instance.id.to_string());
                button type="submit" { "Delete" }
            }
        },
    )
}
