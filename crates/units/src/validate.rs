//! Round-trip consistency checking over a product's conversion table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use savora_catalog::Product;

use crate::inspect::all_units;
use crate::resolve::convert;

/// Tolerance for the round-trip comparison. Absolute, not relative: the rate
/// tables in this domain hold small hand-entered numbers, so a fixed cutoff
/// is enough.
pub const ROUND_TRIP_EPSILON: f64 = 0.001;

/// Validator outcome: warnings, never a hard failure. An inconsistent table
/// still converts; the report tells the operator which entries to fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Check the product's declared rates for data-entry errors.
///
/// Two kinds of findings:
///
/// - a declared rate that is zero, negative, or not finite;
/// - a unit pair whose round trip (`1 a -> b -> a`) lands more than
///   [`ROUND_TRIP_EPSILON`] away from 1, which means two routes between the
///   same units disagree.
///
/// This is a best-effort sanity check, not a full cycle-consistency solver:
/// only mutually reachable pairs are examined, and a contradictory cycle that
/// no single pairwise round trip happens to traverse goes undetected. A
/// product with no declared edges always validates clean. Validation never
/// blocks [`convert`]; the two operations are independent.
pub fn validate_conversions(product: &Product) -> ValidationReport {
    let mut errors = Vec::new();

    for edge in &product.conversions {
        if !edge.has_positive_rate() {
            errors.push(format!(
                "invalid rate {} for {} -> {}: rates must be positive",
                edge.conversion_rate, edge.from_unit, edge.to_unit
            ));
        }
    }

    let units = all_units(product);
    for (i, a) in units.iter().enumerate() {
        for b in &units[i + 1..] {
            let outbound = convert(product, a, b, 1.0);
            if !outbound.success {
                continue;
            }
            let inbound = convert(product, b, a, outbound.converted_value);
            if !inbound.success {
                continue;
            }
            let round_trip = inbound.converted_value;
            if (round_trip - 1.0).abs() > ROUND_TRIP_EPSILON {
                debug!(unit_a = %a, unit_b = %b, round_trip, "round-trip mismatch");
                errors.push(format!(
                    "inconsistent conversion between {a} and {b}: 1 {a} round-trips to {round_trip} {a}"
                ));
            }
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
