//! Integration tests driving the router over the in-memory store

mod authors;
mod books;
mod genres;
mod pages;
mod postgres;
mod support;
