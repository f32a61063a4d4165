use computo_common::{Article, Measurement};

use crate::engine::resolver::{AncestorPath, row_contribution};
use crate::traits::ArticleResolver;

/// One row of the display projection.
#[derive(Debug, Clone, PartialEq)]
pub struct RowProjection<'a> {
    pub measurement: &'a Measurement,
    /// Signed contribution to the article total; `0` for subtotal rows.
    pub raw: f64,
    /// Value printed on the row: the contribution itself, or, for subtotal
    /// rows, the running partial accumulated since the previous checkpoint
    /// ("sommano parziale").
    pub display: f64,
}

/// Re-walk `article`'s rows in stored order, producing per-row display
/// values.
///
/// Subtotal rows display the running partial and reset it; every other row
/// displays its own contribution. The projection is mathematically inert:
/// it shares the row-contribution path with [`resolve_quantity`], so the
/// `raw` values over non-subtotal rows always sum to the article's resolved
/// quantity.
///
/// [`resolve_quantity`]: crate::engine::resolver::resolve_quantity
pub fn project_display<'a, R>(article: &'a Article, articles: &R) -> Vec<RowProjection<'a>>
where
    R: ArticleResolver + ?Sized,
{
    // Same ancestor chain the resolver uses for this article's rows, so a
    // self-referential link projects the same zero it resolves to.
    let path = AncestorPath::new().descend(&article.id);

    let mut rows = Vec::with_capacity(article.measurements.len());
    let mut partial = 0.0;
    for row in &article.measurements {
        if row.is_subtotal() {
            rows.push(RowProjection {
                measurement: row,
                raw: 0.0,
                display: partial,
            });
            partial = 0.0;
        } else {
            let raw = row_contribution(row, articles, &path);
            partial += raw;
            rows.push(RowProjection {
                measurement: row,
                raw,
                display: raw,
            });
        }
    }
    rows
}
