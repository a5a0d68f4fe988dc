//! Per-call unit graph: string interner plus index-based adjacency lists.

use std::collections::{HashMap, VecDeque};

use savora_catalog::Product;

/// A traversable arc: `1 <owner unit> == rate <to>`.
#[derive(Debug, Clone, Copy)]
struct Arc {
    to: usize,
    rate: f64,
}

/// Undirected-weighted view of a product's conversion table.
///
/// Unit names are interned into small indices once per build, so traversal
/// works over `Vec` adjacency instead of repeated string hashing. Every
/// usable declared edge contributes a forward arc and its computed inverse;
/// callers never special-case direction. The graph is rebuilt from the
/// `Product` on every call — the engine keeps no state between calls.
#[derive(Debug)]
pub(crate) struct UnitGraph {
    units: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<Arc>>,
}

impl UnitGraph {
    pub(crate) fn build(product: &Product) -> Self {
        let mut graph = Self {
            units: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        };
        graph.intern(&product.input_unit);
        graph.intern(&product.output_unit);
        for edge in &product.conversions {
            let from = graph.intern(&edge.from_unit);
            let to = graph.intern(&edge.to_unit);
            // Rates that are zero, negative, or not finite are data-entry
            // errors; they name units but contribute no arcs, so no strategy
            // can ever produce a zero or negative factor from them.
            if !edge.has_positive_rate() {
                continue;
            }
            graph.adjacency[from].push(Arc {
                to,
                rate: edge.conversion_rate,
            });
            graph.adjacency[to].push(Arc {
                to: from,
                rate: edge.inverse_rate(),
            });
        }
        graph
    }

    fn intern(&mut self, unit: &str) -> usize {
        if let Some(&ix) = self.index.get(unit) {
            return ix;
        }
        let ix = self.units.len();
        self.units.push(unit.to_string());
        self.index.insert(unit.to_string(), ix);
        self.adjacency.push(Vec::new());
        ix
    }

    /// Known units in first-seen order: input unit, output unit, then edge
    /// endpoints in declaration order.
    pub(crate) fn units(&self) -> &[String] {
        &self.units
    }

    /// Breadth-first search for a fewest-hops conversion route.
    ///
    /// Returns the multiplicative factor along the route and the unit names
    /// visited. Among routes of equal length the winner follows edge
    /// declaration order; callers must not rely on which one they get.
    pub(crate) fn search(&self, from_unit: &str, to_unit: &str) -> Option<(f64, Vec<String>)> {
        let start = *self.index.get(from_unit)?;
        let goal = *self.index.get(to_unit)?;

        let mut visited = vec![false; self.units.len()];
        visited[start] = true;
        let mut queue = VecDeque::new();
        queue.push_back((start, 1.0_f64, vec![start]));

        while let Some((node, factor, path)) = queue.pop_front() {
            if node == goal {
                let names = path.into_iter().map(|ix| self.units[ix].clone()).collect();
                return Some((factor, names));
            }
            for arc in &self.adjacency[node] {
                if visited[arc.to] {
                    continue;
                }
                visited[arc.to] = true;
                let mut next = path.clone();
                next.push(arc.to);
                queue.push_back((arc.to, factor * arc.rate, next));
            }
        }
        None
    }
}
