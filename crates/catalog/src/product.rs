use serde::{Deserialize, Serialize};

use savora_core::{AggregateId, DomainError, DomainResult};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A user-declared pairwise conversion rate: `1 from_unit == conversion_rate to_unit`.
///
/// Storage is directional, but the relation it describes is symmetric: the
/// engine derives the inverse (`to_unit -> from_unit` at `1/conversion_rate`)
/// wherever it builds its view of the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionEdge {
    pub from_unit: String,
    pub to_unit: String,
    pub conversion_rate: f64,
}

impl ConversionEdge {
    /// Build a validated edge. Rejects blank unit names and rates that are
    /// zero, negative, or not finite.
    pub fn new(
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        conversion_rate: f64,
    ) -> DomainResult<Self> {
        let edge = Self {
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            conversion_rate,
        };
        if edge.from_unit.trim().is_empty() || edge.to_unit.trim().is_empty() {
            return Err(DomainError::validation("unit names cannot be empty"));
        }
        if !edge.has_positive_rate() {
            return Err(DomainError::validation(format!(
                "conversion rate must be a positive number, got {conversion_rate}"
            )));
        }
        Ok(edge)
    }

    /// Whether the declared rate is usable in arithmetic.
    ///
    /// Import pipelines deserialize edges without going through [`new`], so
    /// consumers re-check this before trusting an edge rather than assuming
    /// the invariant holds.
    ///
    /// [`new`]: ConversionEdge::new
    pub fn has_positive_rate(&self) -> bool {
        self.conversion_rate.is_finite() && self.conversion_rate > 0.0
    }

    /// Rate of the derived inverse edge (`to_unit -> from_unit`).
    pub fn inverse_rate(&self) -> f64 {
        1.0 / self.conversion_rate
    }
}

/// Product catalog record.
///
/// Fields are public because these records cross the import/export boundary
/// as plain data. `input_unit` and `output_unit` are always valid known units
/// for the product, even when `conversions` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Base unit the product is purchased/stocked in; the conversion engine
    /// uses it as the hub when composing indirect conversions.
    pub input_unit: String,
    /// Unit the product is sold/served in.
    pub output_unit: String,
    /// User-declared pairwise rates. Optional in the wire format; sparse by
    /// nature — the engine derives the rest.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversions: Vec<ConversionEdge>,
}

impl Product {
    /// Build a validated record with an empty conversion table.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        input_unit: impl Into<String>,
        output_unit: impl Into<String>,
    ) -> DomainResult<Self> {
        let product = Self {
            id,
            name: name.into(),
            input_unit: input_unit.into(),
            output_unit: output_unit.into(),
            conversions: Vec::new(),
        };
        if product.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if product.input_unit.trim().is_empty() || product.output_unit.trim().is_empty() {
            return Err(DomainError::validation("base units cannot be empty"));
        }
        Ok(product)
    }

    pub fn with_conversions(mut self, conversions: Vec<ConversionEdge>) -> Self {
        self.conversions = conversions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product_id() -> ProductId {
        ProductId::new(AggregateId::new())
    }

    #[test]
    fn edge_new_accepts_positive_rate() {
        let edge = ConversionEdge::new("trái", "miếng", 8.0).unwrap();
        assert_eq!(edge.from_unit, "trái");
        assert_eq!(edge.to_unit, "miếng");
        assert_eq!(edge.conversion_rate, 8.0);
        assert!(edge.has_positive_rate());
        assert_eq!(edge.inverse_rate(), 0.125);
    }

    #[test]
    fn edge_new_rejects_zero_and_negative_rates() {
        for rate in [0.0, -1.0, -0.125] {
            let err = ConversionEdge::new("trái", "miếng", rate).unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                other => panic!("expected Validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn edge_new_rejects_non_finite_rates() {
        for rate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(ConversionEdge::new("kg", "g", rate).is_err(), "rate {rate} accepted");
        }
    }

    #[test]
    fn edge_new_rejects_blank_units() {
        assert!(ConversionEdge::new("", "miếng", 8.0).is_err());
        assert!(ConversionEdge::new("trái", "   ", 8.0).is_err());
    }

    #[test]
    fn deserialized_edge_bypasses_validation_but_is_flagged() {
        // The wire format cannot enforce the rate invariant; has_positive_rate
        // is the re-check consumers rely on.
        let edge: ConversionEdge =
            serde_json::from_str(r#"{"fromUnit":"kg","toUnit":"g","conversionRate":-3}"#).unwrap();
        assert!(!edge.has_positive_rate());
    }

    #[test]
    fn product_new_rejects_blank_fields() {
        let id = test_product_id();
        assert!(Product::new(id, "  ", "trái", "miếng").is_err());
        assert!(Product::new(id, "Dưa hấu", "", "miếng").is_err());
        assert!(Product::new(id, "Dưa hấu", "trái", " ").is_err());
    }

    #[test]
    fn product_json_uses_camel_case_keys() {
        let product = Product::new(test_product_id(), "Dưa hấu", "trái", "miếng")
            .unwrap()
            .with_conversions(vec![ConversionEdge::new("trái", "miếng", 8.0).unwrap()]);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["inputUnit"], "trái");
        assert_eq!(json["outputUnit"], "miếng");
        assert_eq!(json["conversions"][0]["fromUnit"], "trái");
        assert_eq!(json["conversions"][0]["conversionRate"], 8.0);
    }

    #[test]
    fn product_without_conversions_key_deserializes_to_empty_table() {
        let json = format!(
            r#"{{"id":"{}","name":"Cam","inputUnit":"kg","outputUnit":"quả"}}"#,
            test_product_id()
        );
        let product: Product = serde_json::from_str(&json).unwrap();
        assert!(product.conversions.is_empty());
        assert_eq!(product.input_unit, "kg");
    }
}
