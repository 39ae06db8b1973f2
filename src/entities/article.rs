// 📝 Article Entity - Join row between one Author and one Magazine
//
// The article registry is the only place relationships live. Author and
// magazine queries are scans over it.
//
// Title is immutable. Author/magazine references can be reassigned, but only
// through the Catalog, which checks the new reference first.

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use super::{ArticleId, AuthorId, MagazineId};
use crate::config::Limits;
use crate::validation::{bounded_len, CatalogResult};

// ============================================================================
// ARTICLE ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,

    /// 5-50 characters by default
    title: String,

    registered_at: DateTime<Utc>,
}

impl Article {
    /// Only the title is checked here. The catalog resolves both references
    /// before calling this.
    pub(crate) fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
        limits: &Limits,
    ) -> CatalogResult<Self> {
        let title = title.into();
        bounded_len("title", &title, limits.article_title)?;

        Ok(Article {
            id: ArticleId::new(),
            author,
            magazine,
            title,
            registered_at: Utc::now(),
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Titles are immutable. The request is ignored and `false` returned.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        debug!(
            "ignoring retitle of article {} to {:?}",
            self.id,
            title.into()
        );
        false
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}

// ============================================================================
// ARTICLE REGISTRY
// ============================================================================

/// Append-only registry of articles, insertion order
#[derive(Debug, Default)]
pub struct ArticleRegistry {
    articles: Vec<Article>,
}

impl ArticleRegistry {
    pub fn new() -> Self {
        ArticleRegistry {
            articles: Vec::new(),
        }
    }

    pub(crate) fn register(&mut self, article: Article) {
        debug!(
            "registered article {} ({:?}) author={} magazine={}",
            article.id, article.title, article.author, article.magazine
        );
        self.articles.push(article);
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.iter_mut().find(|a| a.id == id)
    }

    pub fn by_author(&self, author: AuthorId) -> impl Iterator<Item = &Article> + '_ {
        self.articles.iter().filter(move |a| a.author == author)
    }

    pub fn by_magazine(&self, magazine: MagazineId) -> impl Iterator<Item = &Article> + '_ {
        self.articles.iter().filter(move |a| a.magazine == magazine)
    }

    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn count(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> CatalogResult<Article> {
        Article::new(AuthorId::new(), MagazineId::new(), title, &Limits::default())
    }

    #[test]
    fn test_title_bounds() {
        assert!(article("abcd").unwrap_err().is_invalid_value());
        assert!(article("abcde").is_ok());
        assert!(article(&"t".repeat(50)).is_ok());
        assert!(article(&"t".repeat(51)).unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_title_is_immutable() {
        let mut a = article("Tiny robots").unwrap();

        assert!(!a.set_title("Huge robots"));
        assert_eq!(a.title(), "Tiny robots");
    }

    #[test]
    fn test_registry_filters_by_reference() {
        let author = AuthorId::new();
        let magazine = MagazineId::new();
        let limits = Limits::default();

        let mut registry = ArticleRegistry::new();
        assert!(registry.is_empty());

        registry.register(Article::new(author, magazine, "First piece", &limits).unwrap());
        registry.register(Article::new(AuthorId::new(), magazine, "Second piece", &limits).unwrap());
        registry.register(Article::new(author, MagazineId::new(), "Third piece", &limits).unwrap());

        assert_eq!(registry.count(), 3);
        assert_eq!(registry.by_author(author).count(), 2);
        assert_eq!(registry.by_magazine(magazine).count(), 2);

        let titles: Vec<&str> = registry.by_author(author).map(|a| a.title()).collect();
        assert_eq!(titles, vec!["First piece", "Third piece"]);
    }

    #[test]
    fn test_registry_get_mut_reassigns() {
        let mut registry = ArticleRegistry::new();
        let a = article("Tiny robots").unwrap();
        let id = a.id();
        registry.register(a);

        let new_author = AuthorId::new();
        registry.get_mut(id).unwrap().set_author(new_author);

        assert_eq!(registry.get(id).unwrap().author(), new_author);
        assert_eq!(registry.by_author(new_author).count(), 1);
    }
}
