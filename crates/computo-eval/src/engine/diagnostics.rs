//! Link auditing.
//!
//! Resolution itself never reports anything: broken edges silently zero
//! out so an estimate always totals. This pass re-examines every linked row
//! and says *which* edges were degraded, for callers that want to flag them.

use computo_common::{Article, ArticleId, LinkIssue, LinkIssueKind};
use rustc_hash::FxHashSet;

use crate::traits::ArticleResolver;

/// Classify every linked row of `articles`.
///
/// A row is reported with [`LinkIssueKind::DanglingTarget`] when its target
/// id is absent from the collection, and with [`LinkIssueKind::CycleGuard`]
/// when the target's own link chain reaches back to the owning article,
/// which is exactly the set of edges the resolver's ancestor guard
/// short-circuits when the owning article is resolved. Links on subtotal
/// rows are ignored, as they are during resolution. Healthy rows produce
/// nothing.
pub fn audit_links<'a, R>(
    articles: impl IntoIterator<Item = &'a Article>,
    resolver: &R,
) -> Vec<LinkIssue>
where
    R: ArticleResolver + ?Sized,
{
    let mut issues = Vec::new();
    for article in articles {
        for row in &article.measurements {
            let Some(link) = row.link.as_ref().filter(|_| !row.is_subtotal()) else {
                continue;
            };
            let kind = if resolver.article(&link.target).is_none() {
                LinkIssueKind::DanglingTarget
            } else if links_back(&link.target, &article.id, resolver) {
                LinkIssueKind::CycleGuard
            } else {
                continue;
            };
            issues.push(LinkIssue {
                article: article.id.clone(),
                measurement: row.id.clone(),
                target: link.target.clone(),
                kind,
            });
        }
    }
    issues
}

/// True when following link edges from `from` can reach `needle`.
///
/// Plain reachability with a shared visited set; unlike resolution, there
/// is no per-branch semantics to preserve here, only termination.
fn links_back<'a, R>(from: &'a ArticleId, needle: &ArticleId, resolver: &'a R) -> bool
where
    R: ArticleResolver + ?Sized,
{
    if from == needle {
        return true;
    }

    let mut visited: FxHashSet<&ArticleId> = FxHashSet::default();
    let mut stack: Vec<&'a ArticleId> = vec![from];
    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let Some(article) = resolver.article(id) else {
            continue;
        };
        for row in &article.measurements {
            if let Some(link) = row.link.as_ref().filter(|_| !row.is_subtotal()) {
                if &link.target == needle {
                    return true;
                }
                stack.push(&link.target);
            }
        }
    }
    false
}
