//! Measurement rows: the evaluable entries of an article.
//!
//! A row is one of three things, tagged by [`MeasurementKind`]:
//!
//! - **`Positive`** : a geometric sub-computation added to the total
//! - **`Deduction`**: the same, subtracted (openings, voids, …)
//! - **`Subtotal`** : a display checkpoint with no numeric contribution
//!
//! A `Positive`/`Deduction` row either carries dimensional operands
//! (length × width × height × repetition count) or a [`Link`] consuming
//! another article's resolved value. When a link is present the dimensional
//! fields are display-only and the engine does not read them.

use std::fmt::{self, Display};

use crate::ArticleId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a measurement row, unique within its parent article.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeasurementId(String);

impl MeasurementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MeasurementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MeasurementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MeasurementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// How a row contributes to its article's total.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasurementKind {
    #[default]
    Positive,
    Deduction,
    Subtotal,
}

/// Which resolved value of the target article a link consumes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkMode {
    /// The target's resolved quantity, as-is.
    Quantity,
    /// The target's monetary amount: resolved quantity × unit price.
    Amount,
}

/// Reference from a measurement row to another article's resolved value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    pub target: ArticleId,
    pub mode: LinkMode,
}

impl Link {
    pub fn quantity(target: impl Into<ArticleId>) -> Self {
        Self {
            target: target.into(),
            mode: LinkMode::Quantity,
        }
    }

    pub fn amount(target: impl Into<ArticleId>) -> Self {
        Self {
            target: target.into(),
            mode: LinkMode::Amount,
        }
    }
}

/// One evaluable row within an article.
///
/// Dimensional fields are independently optional: any subset may be present,
/// and the evaluator only multiplies the ones that are present and non-zero.
/// `multiplier` is the repetition count ("parti uguali" in Italian takeoff
/// practice); when absent it defaults to 1 as soon as any dimension is
/// present. Row order inside the parent article is significant: it defines
/// the running-subtotal grouping shown by the display projection.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub id: MeasurementId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: MeasurementKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub length: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub width: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub multiplier: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Option<Link>,
}

impl Measurement {
    /// An empty `Positive` row.
    pub fn new(id: impl Into<MeasurementId>) -> Self {
        Self {
            id: id.into(),
            kind: MeasurementKind::Positive,
            description: String::new(),
            length: None,
            width: None,
            height: None,
            multiplier: None,
            link: None,
        }
    }

    /// A display-checkpoint row. Subtotal rows carry no operands; any that
    /// are set anyway are ignored by the engine.
    pub fn subtotal(id: impl Into<MeasurementId>) -> Self {
        Self::new(id).with_kind(MeasurementKind::Subtotal)
    }

    pub fn with_kind(mut self, kind: MeasurementKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    pub fn is_subtotal(&self) -> bool {
        self.kind == MeasurementKind::Subtotal
    }
}
