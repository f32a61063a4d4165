use computo_common::{ArticleId, LinkMode, Measurement};
use smallvec::SmallVec;

use crate::row::evaluate_row;
use crate::traits::ArticleResolver;

/// Ancestor chain of one resolution branch.
///
/// Every recursive step clones the path and appends the current article, so
/// sibling link rows never see each other's descent: a diamond dependency is
/// evaluated once per branch instead of being falsely cut off as a cycle.
/// Only a true ancestor loop trips the guard. Membership is a linear scan;
/// link chains are shallow in practice.
#[derive(Debug, Clone, Default)]
pub struct AncestorPath(SmallVec<[ArticleId; 8]>);

impl AncestorPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ArticleId) -> bool {
        self.0.iter().any(|ancestor| ancestor == id)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The path of a child branch: this path plus `id`.
    pub fn descend(&self, id: &ArticleId) -> Self {
        let mut path = self.clone();
        path.0.push(id.clone());
        path
    }
}

/// Resolve the total quantity of article `id` against `articles`.
///
/// The result is the sum of every row's signed contribution, recursing
/// through links with `path` extended per branch. This never fails: an id
/// already on `path` (a cycle) or absent from `articles` (a dangling
/// reference) resolves to `0` and the rest of the graph still resolves
/// normally. A fresh resolution starts from [`AncestorPath::new`].
///
/// Linked articles are always re-resolved from their stored rows, never
/// read from their possibly-stale `quantity` field, so the result does not
/// depend on any iteration order of the surrounding pass.
pub fn resolve_quantity<R>(id: &ArticleId, articles: &R, path: &AncestorPath) -> f64
where
    R: ArticleResolver + ?Sized,
{
    if path.contains(id) {
        return 0.0;
    }
    let Some(article) = articles.article(id) else {
        return 0.0;
    };

    let path = path.descend(id);
    article
        .measurements
        .iter()
        .map(|row| row_contribution(row, articles, &path))
        .sum()
}

/// Signed contribution of one row of an article whose ancestor chain is
/// `path` (the path already ends with the owning article).
///
/// Shared between the resolver and the display projection so the two can
/// never disagree on a row's value.
pub(crate) fn row_contribution<R>(row: &Measurement, articles: &R, path: &AncestorPath) -> f64
where
    R: ArticleResolver + ?Sized,
{
    // A link on a subtotal row is ignored, not followed.
    let Some(link) = row.link.as_ref().filter(|_| !row.is_subtotal()) else {
        return evaluate_row(row, None);
    };

    let source_quantity = resolve_quantity(&link.target, articles, path);
    let linked_value = match link.mode {
        LinkMode::Quantity => source_quantity,
        LinkMode::Amount => {
            let unit_price = articles.article(&link.target).map_or(0.0, |a| a.unit_price);
            source_quantity * unit_price
        }
    };
    evaluate_row(row, Some(linked_value))
}
