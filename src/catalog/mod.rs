//! Catalog Fetching
//!
//! One list request, then a concurrent fan-out for the detail records.

mod client;
mod fetch;

pub use client::{HttpClient, HttpSource};
pub use fetch::{load_catalog, Catalog};
