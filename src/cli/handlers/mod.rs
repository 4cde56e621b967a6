//! Shared command handlers

mod export;

pub use export::{fetch_all, for_each_page};
