//! HTTP request handlers.

pub mod page;
