// 📚 Catalog - Composition root owning every registry
//
// One Catalog = one independent world of authors, magazines and articles.
// Nothing is process-global: two catalogs never see each other's entities,
// and an id from one catalog is "not an Author" (InvalidType) in another.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::config::Limits;
use crate::entities::{
    Article, ArticleId, ArticleRegistry, Author, AuthorId, AuthorRegistry, Magazine, MagazineId,
    MagazineRegistry,
};
use crate::validation::{CatalogError, CatalogResult};

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Default)]
pub struct Catalog {
    limits: Limits,
    authors: AuthorRegistry,
    magazines: MagazineRegistry,
    articles: ArticleRegistry,
}

impl Catalog {
    /// Empty catalog with default limits
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Empty catalog with custom limits
    pub fn with_limits(limits: Limits) -> Result<Self> {
        limits.validate().context("Invalid catalog limits")?;
        info!(
            "catalog limits: magazine_name={}-{}, article_title={}-{}, contributor_threshold={}",
            limits.magazine_name.min,
            limits.magazine_name.max,
            limits.article_title.min,
            limits.article_title.max,
            limits.contributor_threshold
        );

        Ok(Catalog {
            limits,
            ..Catalog::default()
        })
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create and register an author. Returns a handle (authors are immutable).
    pub fn create_author(&mut self, name: impl Into<String>) -> CatalogResult<Author> {
        let author = Author::new(name)?;
        self.authors.register(author.clone());
        Ok(author)
    }

    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let magazine = Magazine::new(name, category, &self.limits)?;
        let id = magazine.id();
        self.magazines.register(magazine);
        Ok(id)
    }

    /// Create an article joining `author` and `magazine`.
    ///
    /// All checks run before anything is registered, so a failure leaves
    /// every registry untouched.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.require_author(author)?;
        self.require_magazine(magazine)?;
        let article = Article::new(author, magazine, title, &self.limits)?;

        let id = article.id();
        self.articles.register(article);
        Ok(id)
    }

    // ========================================================================
    // REASSIGNMENT
    // ========================================================================

    /// Point an article at a different author
    pub fn reassign_author(&mut self, article: ArticleId, author: AuthorId) -> CatalogResult<()> {
        self.require_author(author)?;
        let entry = self.article_entry(article)?;

        debug!("article {} author {} -> {}", article, entry.author(), author);
        entry.set_author(author);
        Ok(())
    }

    /// Point an article at a different magazine
    pub fn reassign_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> CatalogResult<()> {
        self.require_magazine(magazine)?;
        let entry = self.article_entry(article)?;

        debug!("article {} magazine {} -> {}", article, entry.magazine(), magazine);
        entry.set_magazine(magazine);
        Ok(())
    }

    fn require_author(&self, id: AuthorId) -> CatalogResult<()> {
        if self.authors.contains(id) {
            Ok(())
        } else {
            Err(CatalogError::invalid_type(
                "author",
                format!("{} is not an author in this catalog", id),
            ))
        }
    }

    fn require_magazine(&self, id: MagazineId) -> CatalogResult<()> {
        if self.magazines.contains(id) {
            Ok(())
        } else {
            Err(CatalogError::invalid_type(
                "magazine",
                format!("{} is not a magazine in this catalog", id),
            ))
        }
    }

    fn article_entry(&mut self, id: ArticleId) -> CatalogResult<&mut Article> {
        self.articles.get_mut(id).ok_or_else(|| {
            CatalogError::invalid_type("article", format!("{} is not an article in this catalog", id))
        })
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(id)
    }

    /// Mutable access for silent-discard updates (set_name / set_category)
    pub fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.get_mut(id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id)
    }

    /// Mutable access to an article. Only the title setter is public, and it
    /// is a no-op; references change through reassign_author/reassign_magazine.
    pub fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.get_mut(id)
    }

    pub fn authors(&self) -> &AuthorRegistry {
        &self.authors
    }

    pub fn magazines(&self) -> &MagazineRegistry {
        &self.magazines
    }

    pub fn articles(&self) -> &ArticleRegistry {
        &self.articles
    }

    pub fn article_count_for(&self, magazine: MagazineId) -> usize {
        self.articles.by_magazine(magazine).count()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            authors: self.authors.all().to_vec(),
            magazines: self.magazines.all().to_vec(),
            articles: self.articles.all().to_vec(),
        }
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Point-in-time copy of every registry, for inspection and debugging
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub authors: Vec<Author>,
    pub magazines: Vec<Magazine>,
    pub articles: Vec<Article>,
}

impl CatalogSnapshot {
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize catalog snapshot")
    }
}

// ============================================================================
// TESTS
// ============================================================================
