//! Notebook generator page host: named regions, rendering and the page loop.
pub mod platform;
