//! Read-only helpers for UI display: unit enumeration and a rendered summary
//! of every resolvable one-unit conversion.

use savora_catalog::Product;

use crate::graph::UnitGraph;
use crate::resolve::convert;

/// Every unit the product knows about: `input_unit`, `output_unit`, and both
/// endpoints of every declared edge, each exactly once, in first-seen order.
pub fn all_units(product: &Product) -> Vec<String> {
    UnitGraph::build(product).units().to_vec()
}

/// One display line per resolvable unordered unit pair: `"1 {a} = {value} {b}"`.
///
/// Display only; business logic never reads these strings.
pub fn conversion_summary(product: &Product) -> Vec<String> {
    let units = all_units(product);
    let mut lines = Vec::new();
    for (i, a) in units.iter().enumerate() {
        for b in &units[i + 1..] {
            let result = convert(product, a, b, 1.0);
            if result.success {
                lines.push(format!("1 {a} = {} {b}", result.converted_value));
            }
        }
    }
    lines
}
