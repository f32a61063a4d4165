pub mod error;
pub mod estimate;

pub use error::EstimateError;
pub use estimate::Estimate;

// Re-export for convenience
pub use computo_common::{
    Article, ArticleId, Link, LinkIssue, LinkIssueKind, LinkMode, Measurement, MeasurementId,
    MeasurementKind,
};
pub use computo_eval::{RecalcReport, RecalcStatus, RowProjection};
