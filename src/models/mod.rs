//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

use chrono::NaiveDate;

// Re-export commonly used types
pub use author::{Author, AuthorFields, AuthorForm};
pub use book::{Book, BookFields, BookForm};
pub use book_instance::{BookInstance, BookInstanceFields, BookInstanceForm, BookStatus};
pub use genre::{Genre, GenreFields, GenreForm};

/// Medium display format, e.g. `Jan 5, 1920`
pub fn format_date_medium(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Value of a date input, e.g. `1920-01-05`
pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
