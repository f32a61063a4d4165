use std::fmt::{self, Display};

use crate::{Measurement, MeasurementId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque identifier of an article. The engine never interprets the
/// contents; callers typically mint these in their persistence layer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ArticleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A priced line item in a bill of quantities.
///
/// `quantity` is derived state: it is owned by the batch recalculation pass
/// and refreshed from `measurements` (and from linked articles) after every
/// mutation. It is never set by hand while the engine is in charge of the
/// collection.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    /// Price-list / tariff code, e.g. `"E.01.040.a"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub code: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Unit-of-measure label, e.g. `"m³"`. Display-only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit_price: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub quantity: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub measurements: Vec<Measurement>,
}

impl Article {
    pub fn new(id: impl Into<ArticleId>) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            description: String::new(),
            unit: String::new(),
            unit_price: 0.0,
            quantity: 0.0,
            measurements: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = unit_price;
        self
    }

    pub fn with_measurements(mut self, measurements: Vec<Measurement>) -> Self {
        self.measurements = measurements;
        self
    }

    /// Monetary amount of the line item: resolved quantity × unit price.
    pub fn amount(&self) -> f64 {
        self.quantity * self.unit_price
    }

    pub fn measurement(&self, id: &MeasurementId) -> Option<&Measurement> {
        self.measurements.iter().find(|m| &m.id == id)
    }

    pub fn measurement_mut(&mut self, id: &MeasurementId) -> Option<&mut Measurement> {
        self.measurements.iter_mut().find(|m| &m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_quantity_times_unit_price() {
        let mut article = Article::new("a1").with_unit_price(12.5);
        article.quantity = 4.0;
        assert_eq!(article.amount(), 50.0);
    }

    #[test]
    fn measurement_lookup_by_id() {
        let article = Article::new("a1")
            .with_measurements(vec![Measurement::new("m1"), Measurement::new("m2")]);
        assert!(article.measurement(&"m2".into()).is_some());
        assert!(article.measurement(&"m9".into()).is_none());
    }
}
