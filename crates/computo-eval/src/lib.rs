pub mod engine;
pub mod row;
pub mod traits;

pub use engine::diagnostics::audit_links;
pub use engine::projection::{RowProjection, project_display};
pub use engine::recalc::{RecalcReport, RecalcStatus, recalculate_all, recalculate_with_report};
pub use engine::resolver::{AncestorPath, resolve_quantity};
pub use row::evaluate_row;
pub use traits::{ArticleResolver, ArticleSet};
