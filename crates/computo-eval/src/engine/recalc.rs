use std::time::{Duration, Instant};

use computo_common::{Article, LinkIssue, LinkIssueKind};

use crate::engine::diagnostics::audit_links;
use crate::engine::resolver::{AncestorPath, resolve_quantity};
use crate::traits::ArticleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecalcStatus {
    Clean,
    IssuesFound,
}

impl RecalcStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::IssuesFound => "issues_found",
        }
    }
}

/// Outcome of one full recalculation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RecalcReport {
    pub status: RecalcStatus,
    pub articles_resolved: usize,
    pub dangling_links: usize,
    pub cycle_links: usize,
    pub issues: Vec<LinkIssue>,
    pub elapsed: Duration,
}

impl Default for RecalcReport {
    fn default() -> Self {
        Self {
            status: RecalcStatus::Clean,
            articles_resolved: 0,
            dangling_links: 0,
            cycle_links: 0,
            issues: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }
}

impl RecalcReport {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Refresh every article's `quantity` field.
///
/// A pure transform: same input, same output; every article is re-resolved
/// transitively from stored rows, so the result is independent of the order
/// articles appear in. Call this after every external mutation: the engine
/// does no dirty tracking, every pass is a full pass.
pub fn recalculate_all(articles: Vec<Article>) -> Vec<Article> {
    recalculate_with_report(articles).0
}

/// [`recalculate_all`], plus a report of what the pass encountered.
pub fn recalculate_with_report(articles: Vec<Article>) -> (Vec<Article>, RecalcReport) {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("recalculate_all", articles = articles.len()).entered();
    let start = Instant::now();

    let (quantities, issues) = {
        let set = ArticleSet::new(&articles);
        let root = AncestorPath::new();
        let quantities: Vec<f64> = articles
            .iter()
            .map(|article| resolve_quantity(&article.id, &set, &root))
            .collect();
        (quantities, audit_links(&articles, &set))
    };

    let mut articles = articles;
    for (article, quantity) in articles.iter_mut().zip(quantities) {
        article.quantity = quantity;
    }

    let dangling_links = issues
        .iter()
        .filter(|i| i.kind == LinkIssueKind::DanglingTarget)
        .count();
    let cycle_links = issues.len() - dangling_links;

    let report = RecalcReport {
        status: if issues.is_empty() {
            RecalcStatus::Clean
        } else {
            RecalcStatus::IssuesFound
        },
        articles_resolved: articles.len(),
        dangling_links,
        cycle_links,
        issues,
        elapsed: start.elapsed(),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        articles = report.articles_resolved,
        dangling = report.dangling_links,
        cycles = report.cycle_links,
        "recalculation pass finished"
    );

    (articles, report)
}
