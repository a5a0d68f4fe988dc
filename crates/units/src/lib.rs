//! Unit-conversion resolution engine for multi-unit stock items.
//!
//! Food-and-beverage products track stock in several inconsistently named
//! units ("trái", "miếng", "đĩa", ...) linked only by a sparse, user-entered
//! table of pairwise rates. This crate answers conversion requests between
//! any two units of a product — deriving missing rates by composing declared
//! ones — and checks the table for contradictory entries.
//!
//! Everything here is pure and synchronous: each call rebuilds its view of
//! the graph from the [`Product`](savora_catalog::Product) it is handed and
//! returns plain data. No state is shared between calls, so concurrent use
//! needs no coordination, and edits to a product's conversion table take
//! effect on the next call.

mod graph;

pub mod inspect;
pub mod resolve;
pub mod validate;

pub use inspect::{all_units, conversion_summary};
pub use resolve::{ConversionResult, convert};
pub use validate::{ROUND_TRIP_EPSILON, ValidationReport, validate_conversions};
