use computo_common::{Article, ArticleId};
use rustc_hash::FxHashMap;

/// Lookup seam between the resolver and whatever owns the article
/// collection.
///
/// The engine only ever asks for single articles by id while walking link
/// chains; it never iterates storage through this trait. Implementations
/// must hand back a stable snapshot for the duration of a resolution pass.
pub trait ArticleResolver {
    fn article(&self, id: &ArticleId) -> Option<&Article>;
}

impl<R: ArticleResolver + ?Sized> ArticleResolver for &R {
    fn article(&self, id: &ArticleId) -> Option<&Article> {
        (**self).article(id)
    }
}

impl ArticleResolver for FxHashMap<ArticleId, Article> {
    fn article(&self, id: &ArticleId) -> Option<&Article> {
        self.get(id)
    }
}

/// Linear scan; fine for small collections and tests.
impl ArticleResolver for [Article] {
    fn article(&self, id: &ArticleId) -> Option<&Article> {
        self.iter().find(|a| &a.id == id)
    }
}

/// Borrowed id → article index over an existing collection.
///
/// Built once per recalculation pass so that link resolution is O(1) per
/// hop regardless of collection size. If two articles share an id the last
/// one wins, mirroring a map insert.
pub struct ArticleSet<'a> {
    by_id: FxHashMap<&'a ArticleId, &'a Article>,
}

impl<'a> ArticleSet<'a> {
    pub fn new(articles: impl IntoIterator<Item = &'a Article>) -> Self {
        Self {
            by_id: articles.into_iter().map(|a| (&a.id, a)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl ArticleResolver for ArticleSet<'_> {
    fn article(&self, id: &ArticleId) -> Option<&Article> {
        self.by_id.get(id).copied()
    }
}
