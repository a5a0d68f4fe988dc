//! Conversion resolution.
//!
//! Strategies are tried from cheapest to most general: identity, a declared
//! edge, composition through the product's input unit, the derived inverse of
//! a declared edge, and finally breadth-first search over the full graph.

use serde::{Deserialize, Serialize};
use tracing::debug;

use savora_catalog::Product;

use crate::graph::UnitGraph;

/// Outcome of a single conversion request.
///
/// Failure is a value, never a panic: callers (typically UI code) branch on
/// `success` and surface `error` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub success: bool,
    /// Converted quantity; `0.0` when `success` is false.
    pub converted_value: f64,
    /// Unit names visited, starting at the source unit and ending at the
    /// target on success. A single entry for the identity case; empty on
    /// failure.
    pub conversion_path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResult {
    fn resolved(converted_value: f64, conversion_path: Vec<String>) -> Self {
        Self {
            success: true,
            converted_value,
            conversion_path,
            error: None,
        }
    }

    fn no_path(from_unit: &str, to_unit: &str) -> Self {
        Self {
            success: false,
            converted_value: 0.0,
            conversion_path: Vec::new(),
            error: Some(format!("no path found from {from_unit} to {to_unit}")),
        }
    }
}

/// Convert `quantity` of `from_unit` into `to_unit` using the product's
/// declared rates and their derived inverses.
///
/// `from_unit` and `to_unit` are free text and need not be pre-registered;
/// `quantity` may be any real number — only declared *rates* are validated,
/// not the quantity being converted. Pure function of its inputs.
///
/// Strategies run in a fixed order and the first hit wins, so when several
/// could answer the same query the most direct one determines the reported
/// value and path:
///
/// 1. identity (`from_unit == to_unit`)
/// 2. a declared edge `from_unit -> to_unit`
/// 3. composition through the product's input unit
/// 4. the derived inverse of a declared edge `to_unit -> from_unit`
/// 5. breadth-first search over the full unit graph
///
/// Because the hub composition runs before the inverse fallback, a round trip
/// may come back along a different route than it went out on; the validator
/// relies on that asymmetry to spot contradictory rate tables.
pub fn convert(
    product: &Product,
    from_unit: &str,
    to_unit: &str,
    quantity: f64,
) -> ConversionResult {
    if from_unit == to_unit {
        return ConversionResult::resolved(quantity, vec![from_unit.to_string()]);
    }
    if let Some((value, path)) = direct(product, from_unit, to_unit, quantity) {
        return ConversionResult::resolved(value, path);
    }
    if let Some((value, path)) = via_input_unit(product, from_unit, to_unit, quantity) {
        return ConversionResult::resolved(value, path);
    }
    if let Some((value, path)) = reverse(product, from_unit, to_unit, quantity) {
        return ConversionResult::resolved(value, path);
    }

    let graph = UnitGraph::build(product);
    if let Some((factor, path)) = graph.search(from_unit, to_unit) {
        debug!(from_unit, to_unit, hops = path.len() - 1, "resolved via graph search");
        return ConversionResult::resolved(quantity * factor, path);
    }

    debug!(from_unit, to_unit, "no conversion path");
    ConversionResult::no_path(from_unit, to_unit)
}

/// First usable declared edge `from -> to`.
fn direct(product: &Product, from: &str, to: &str, quantity: f64) -> Option<(f64, Vec<String>)> {
    let edge = product
        .conversions
        .iter()
        .find(|e| e.has_positive_rate() && e.from_unit == from && e.to_unit == to)?;
    Some((
        quantity * edge.conversion_rate,
        vec![from.to_string(), to.to_string()],
    ))
}

/// Derived inverse of the first usable declared edge `to -> from`.
fn reverse(product: &Product, from: &str, to: &str, quantity: f64) -> Option<(f64, Vec<String>)> {
    let edge = product
        .conversions
        .iter()
        .find(|e| e.has_positive_rate() && e.from_unit == to && e.to_unit == from)?;
    Some((
        quantity / edge.conversion_rate,
        vec![from.to_string(), to.to_string()],
    ))
}

/// One leg of a hub composition: identity, declared edge, or derived inverse.
/// Legs stay shallow by design; anything deeper is the graph search's job.
fn resolve_leg(
    product: &Product,
    from: &str,
    to: &str,
    quantity: f64,
) -> Option<(f64, Vec<String>)> {
    if from == to {
        return Some((quantity, vec![from.to_string()]));
    }
    direct(product, from, to, quantity).or_else(|| reverse(product, from, to, quantity))
}

/// Compose `from -> input_unit -> to`, dropping the duplicated hub at the
/// path join. Fails as a whole if either leg fails.
fn via_input_unit(
    product: &Product,
    from: &str,
    to: &str,
    quantity: f64,
) -> Option<(f64, Vec<String>)> {
    let hub = product.input_unit.as_str();
    let (at_hub, mut path) = resolve_leg(product, from, hub, quantity)?;
    let (value, tail) = resolve_leg(product, hub, to, at_hub)?;
    path.extend(tail.into_iter().skip(1));
    Some((value, path))
}
