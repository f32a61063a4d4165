use computo_common::{ArticleId, MeasurementId};
use thiserror::Error;

/// Caller mistakes against the estimate API.
///
/// These are the only errors in the workspace: the engine itself never
/// fails. Broken links and cycles degrade to zero contributions and are
/// reported as [`LinkIssue`](computo_common::LinkIssue) data instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("unknown article `{0}`")]
    UnknownArticle(ArticleId),

    #[error("article `{0}` already exists")]
    DuplicateArticle(ArticleId),

    #[error("article `{article}` has no measurement `{measurement}`")]
    UnknownMeasurement {
        article: ArticleId,
        measurement: MeasurementId,
    },

    #[error("measurement `{measurement}` already exists in article `{article}`")]
    DuplicateMeasurement {
        article: ArticleId,
        measurement: MeasurementId,
    },

    #[error("row index {index} out of bounds for article `{article}` ({len} rows)")]
    RowIndexOutOfBounds {
        article: ArticleId,
        index: usize,
        len: usize,
    },
}
