// ✍️ Author Entity - Immutable identity, relationships derived from articles
//
// "Author name is fixed at construction. Everything else about an author
//  (magazines, topics) is read off the article registry."
//
// An Author never changes after construction, so a clone is a handle that
// can never go stale. That is why Catalog::create_author hands one back.

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

use super::{Article, ArticleId, AuthorId, Magazine, MagazineId};
use crate::catalog::Catalog;
use crate::validation::{non_blank, CatalogResult};

// ============================================================================
// AUTHOR ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Stable identity (UUID) - NEVER changes
    id: AuthorId,

    /// Display name, at least one non-whitespace character
    name: String,

    /// When the catalog accepted this author
    registered_at: DateTime<Utc>,
}

impl Author {
    /// Validate and build an author. Registration is the catalog's job.
    pub(crate) fn new(name: impl Into<String>) -> CatalogResult<Self> {
        let name = name.into();
        non_blank("name", &name)?;

        Ok(Author {
            id: AuthorId::new(),
            name,
            registered_at: Utc::now(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Names are immutable. The request is ignored and `false` returned.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        debug!(
            "ignoring rename of author {} to {:?}",
            self.id,
            name.into()
        );
        false
    }

    // ========================================================================
    // RELATIONSHIP QUERIES
    // ========================================================================

    /// Every article written by this author, in registry order
    pub fn articles<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Article> {
        catalog.articles().by_author(self.id).collect()
    }

    /// Distinct magazines this author has written for (first-seen order)
    pub fn magazines<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Magazine> {
        let mut seen = HashSet::new();
        catalog
            .articles()
            .by_author(self.id)
            .map(|article| article.magazine())
            .filter(|id| seen.insert(*id))
            .filter_map(|id| catalog.magazine(id))
            .collect()
    }

    /// Write a new article for `magazine`. Same rules as Catalog::create_article.
    pub fn add_article(
        &self,
        catalog: &mut Catalog,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        catalog.create_article(self.id, magazine, title)
    }

    /// Distinct categories of the magazines this author wrote for.
    ///
    /// `None` when the author has no articles at all. Two magazines sharing a
    /// category contribute one entry.
    pub fn topic_areas(&self, catalog: &Catalog) -> Option<Vec<String>> {
        let magazines = self.magazines(catalog);
        if magazines.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        Some(
            magazines
                .into_iter()
                .map(|magazine| magazine.category())
                .filter(|category| seen.insert(*category))
                .map(str::to_string)
                .collect(),
        )
    }
}

// ============================================================================
// AUTHOR REGISTRY
// ============================================================================

/// Append-only registry of authors, construction order
#[derive(Debug, Default)]
pub struct AuthorRegistry {
    authors: Vec<Author>,
}

impl AuthorRegistry {
    pub fn new() -> Self {
        AuthorRegistry {
            authors: Vec::new(),
        }
    }

    pub(crate) fn register(&mut self, author: Author) {
        debug!("registered author {} ({:?})", author.id, author.name);
        self.authors.push(author);
    }

    pub fn get(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: AuthorId) -> bool {
        self.get(id).is_some()
    }

    /// First author registered under exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.name == name)
    }

    pub fn all(&self) -> &[Author] {
        &self.authors
    }

    pub fn count(&self) -> usize {
        self.authors.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
