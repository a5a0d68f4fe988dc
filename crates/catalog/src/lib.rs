//! Product catalog records.
//!
//! This crate holds the data model the rest of the system exchanges: product
//! records with their declared unit-conversion table. Records are produced by
//! the catalog screens and the Excel/Google Sheets import pipelines and
//! consumed read-only by the conversion engine. Pure data, no IO, no storage.

pub mod product;

pub use product::{ConversionEdge, Product, ProductId};
