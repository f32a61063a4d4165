use computo_common::{Article, ArticleId, LinkIssue, Measurement, MeasurementId};
use computo_eval::{
    ArticleResolver, RecalcReport, RowProjection, project_display, recalculate_with_report,
};
use rustc_hash::FxHashMap;

use crate::error::EstimateError;

/// An estimate document: the ordered article collection plus the engine
/// glue around it.
///
/// Every mutation re-runs the full recalculation pass before returning, so
/// `quantity` fields and the [`RecalcReport`] are never stale. Reads are
/// plain borrows; there is no interior mutability and no I/O. Loading and
/// saving the document is the caller's concern.
pub struct Estimate {
    articles: Vec<Article>,
    index: FxHashMap<ArticleId, usize>,
    report: RecalcReport,
}

impl ArticleResolver for Estimate {
    fn article(&self, id: &ArticleId) -> Option<&Article> {
        self.index.get(id).map(|&ix| &self.articles[ix])
    }
}

impl Default for Estimate {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimate {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            index: FxHashMap::default(),
            report: RecalcReport::default(),
        }
    }

    /// Adopt an existing collection, e.g. one loaded by a persistence
    /// layer. Quantities are recomputed immediately; whatever the loaded
    /// records carried is discarded.
    pub fn from_articles(articles: Vec<Article>) -> Result<Self, EstimateError> {
        let mut index = FxHashMap::default();
        for (ix, article) in articles.iter().enumerate() {
            if index.insert(article.id.clone(), ix).is_some() {
                return Err(EstimateError::DuplicateArticle(article.id.clone()));
            }
        }
        let mut estimate = Self {
            articles,
            index,
            report: RecalcReport::default(),
        };
        estimate.recalculate();
        Ok(estimate)
    }

    /* ───────────────────────── reads ───────────────────────── */

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Articles in document order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn article(&self, id: &ArticleId) -> Option<&Article> {
        ArticleResolver::article(self, id)
    }

    pub fn quantity(&self, id: &ArticleId) -> Option<f64> {
        self.article(id).map(|a| a.quantity)
    }

    pub fn amount(&self, id: &ArticleId) -> Option<f64> {
        self.article(id).map(|a| a.amount())
    }

    /// Total monetary amount of the document.
    pub fn total_amount(&self) -> f64 {
        self.articles.iter().map(|a| a.amount()).sum()
    }

    /// Per-row display values for one article, running subtotals included.
    pub fn display_rows(&self, id: &ArticleId) -> Result<Vec<RowProjection<'_>>, EstimateError> {
        let article = self
            .article(id)
            .ok_or_else(|| EstimateError::UnknownArticle(id.clone()))?;
        Ok(project_display(article, self))
    }

    /// Report of the most recent recalculation pass.
    pub fn report(&self) -> &RecalcReport {
        &self.report
    }

    /// Degraded link edges found by the most recent pass.
    pub fn link_issues(&self) -> &[LinkIssue] {
        &self.report.issues
    }

    /* ──────────────────────── mutations ─────────────────────── */

    pub fn add_article(&mut self, article: Article) -> Result<(), EstimateError> {
        if self.index.contains_key(&article.id) {
            return Err(EstimateError::DuplicateArticle(article.id));
        }
        self.index.insert(article.id.clone(), self.articles.len());
        self.articles.push(article);
        self.recalculate();
        Ok(())
    }

    /// Remove an article. Links held by other articles are left pointing at
    /// the removed id (invalidated, never auto-repaired) and show up as
    /// dangling-target issues in the next report.
    pub fn remove_article(&mut self, id: &ArticleId) -> Result<Article, EstimateError> {
        let ix = self
            .index
            .remove(id)
            .ok_or_else(|| EstimateError::UnknownArticle(id.clone()))?;
        let removed = self.articles.remove(ix);
        self.reindex();
        self.recalculate();
        Ok(removed)
    }

    pub fn set_unit_price(&mut self, id: &ArticleId, unit_price: f64) -> Result<(), EstimateError> {
        self.article_mut(id)?.unit_price = unit_price;
        self.recalculate();
        Ok(())
    }

    pub fn push_measurement(
        &mut self,
        id: &ArticleId,
        row: Measurement,
    ) -> Result<(), EstimateError> {
        let len = self.article(id).map(|a| a.measurements.len());
        match len {
            Some(len) => self.insert_measurement(id, len, row),
            None => Err(EstimateError::UnknownArticle(id.clone())),
        }
    }

    pub fn insert_measurement(
        &mut self,
        id: &ArticleId,
        index: usize,
        row: Measurement,
    ) -> Result<(), EstimateError> {
        let article = self.article_mut(id)?;
        if index > article.measurements.len() {
            return Err(EstimateError::RowIndexOutOfBounds {
                article: id.clone(),
                index,
                len: article.measurements.len(),
            });
        }
        if article.measurement(&row.id).is_some() {
            return Err(EstimateError::DuplicateMeasurement {
                article: id.clone(),
                measurement: row.id,
            });
        }
        article.measurements.insert(index, row);
        self.recalculate();
        Ok(())
    }

    pub fn remove_measurement(
        &mut self,
        id: &ArticleId,
        row_id: &MeasurementId,
    ) -> Result<Measurement, EstimateError> {
        let article = self.article_mut(id)?;
        let ix = article
            .measurements
            .iter()
            .position(|m| &m.id == row_id)
            .ok_or_else(|| EstimateError::UnknownMeasurement {
                article: id.clone(),
                measurement: row_id.clone(),
            })?;
        let removed = article.measurements.remove(ix);
        self.recalculate();
        Ok(removed)
    }

    /// Reorder a row within its article. Order matters: it defines the
    /// running-subtotal grouping of the display projection.
    pub fn move_measurement(
        &mut self,
        id: &ArticleId,
        row_id: &MeasurementId,
        to: usize,
    ) -> Result<(), EstimateError> {
        let article = self.article_mut(id)?;
        let len = article.measurements.len();
        if to >= len {
            return Err(EstimateError::RowIndexOutOfBounds {
                article: id.clone(),
                index: to,
                len,
            });
        }
        let from = article
            .measurements
            .iter()
            .position(|m| &m.id == row_id)
            .ok_or_else(|| EstimateError::UnknownMeasurement {
                article: id.clone(),
                measurement: row_id.clone(),
            })?;
        let row = article.measurements.remove(from);
        article.measurements.insert(to, row);
        self.recalculate();
        Ok(())
    }

    /// Edit one row in place (dimensions, multiplier, kind, link). The
    /// row's id is preserved; edits to it inside the closure are discarded.
    pub fn edit_measurement(
        &mut self,
        id: &ArticleId,
        row_id: &MeasurementId,
        edit: impl FnOnce(&mut Measurement),
    ) -> Result<(), EstimateError> {
        let article = self.article_mut(id)?;
        let row = article
            .measurement_mut(row_id)
            .ok_or_else(|| EstimateError::UnknownMeasurement {
                article: id.clone(),
                measurement: row_id.clone(),
            })?;
        let keep = row.id.clone();
        edit(row);
        row.id = keep;
        self.recalculate();
        Ok(())
    }

    /// Re-run the full pass. Mutation methods call this themselves; it is
    /// public for callers that edit articles through other means.
    pub fn recalculate(&mut self) {
        let articles = std::mem::take(&mut self.articles);
        let (articles, report) = recalculate_with_report(articles);
        self.articles = articles;
        self.report = report;
    }

    fn article_mut(&mut self, id: &ArticleId) -> Result<&mut Article, EstimateError> {
        match self.index.get(id) {
            Some(&ix) => Ok(&mut self.articles[ix]),
            None => Err(EstimateError::UnknownArticle(id.clone())),
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .articles
            .iter()
            .enumerate()
            .map(|(ix, a)| (a.id.clone(), ix))
            .collect();
    }
}
