// src/lib.rs

//! sheetpost library: spreadsheet-backed blog post ingestion.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
