// 📰 Magazine Entity - Mutable name/category with silent-discard updates
//
// "A bad rename is ignored, not rejected."
//
// Magazines keep the name bounds they were built with, so later updates are
// checked against the same rule as construction.

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::{Article, Author, AuthorId, MagazineId};
use crate::catalog::Catalog;
use crate::config::Limits;
use crate::validation::{bounded_len, non_empty, CatalogResult, LengthRange};

// ============================================================================
// MAGAZINE ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    /// Stable identity (UUID) - NEVER changes
    id: MagazineId,

    /// 2-16 characters by default
    name: String,

    /// Non-empty topic label (e.g. "Fashion", "Tech")
    category: String,

    registered_at: DateTime<Utc>,

    #[serde(skip)]
    name_range: LengthRange,
}

impl Magazine {
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        limits: &Limits,
    ) -> CatalogResult<Self> {
        let name = name.into();
        let category = category.into();
        bounded_len("name", &name, limits.magazine_name)?;
        non_empty("category", &category)?;

        Ok(Magazine {
            id: MagazineId::new(),
            name,
            category,
            registered_at: Utc::now(),
            name_range: limits.magazine_name,
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Rename if the new name is in range. Returns whether it applied.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        match bounded_len("name", &name, self.name_range) {
            Ok(()) => {
                self.name = name;
                true
            }
            Err(err) => {
                debug!("discarded update on magazine {}: {}", self.id, err);
                false
            }
        }
    }

    /// Recategorise if the new category is non-empty. Returns whether it applied.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        match non_empty("category", &category) {
            Ok(()) => {
                self.category = category;
                true
            }
            Err(err) => {
                debug!("discarded update on magazine {}: {}", self.id, err);
                false
            }
        }
    }

    // ========================================================================
    // RELATIONSHIP QUERIES
    // ========================================================================

    /// Every article published in this magazine, in registry order
    pub fn articles<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Article> {
        catalog.articles().by_magazine(self.id).collect()
    }

    /// Distinct authors who have written for this magazine (first-seen order)
    pub fn contributors<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Author> {
        let mut seen = HashSet::new();
        catalog
            .articles()
            .by_magazine(self.id)
            .map(|article| article.author())
            .filter(|id| seen.insert(*id))
            .filter_map(|id| catalog.author(id))
            .collect()
    }

    /// Titles in article order, `None` if nothing was published here
    pub fn article_titles<'c>(&self, catalog: &'c Catalog) -> Option<Vec<&'c str>> {
        let titles: Vec<&str> = catalog
            .articles()
            .by_magazine(self.id)
            .map(|article| article.title())
            .collect();

        if titles.is_empty() {
            None
        } else {
            Some(titles)
        }
    }

    /// Authors with more than `contributor_threshold` (default 2) articles
    /// here. `None` if nobody qualifies.
    pub fn contributing_authors<'c>(&self, catalog: &'c Catalog) -> Option<Vec<&'c Author>> {
        let threshold = catalog.limits().contributor_threshold;

        let mut order: Vec<AuthorId> = Vec::new();
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in catalog.articles().by_magazine(self.id) {
            let count = counts.entry(article.author()).or_insert(0);
            if *count == 0 {
                order.push(article.author());
            }
            *count += 1;
        }

        let authors: Vec<&Author> = order
            .into_iter()
            .filter(|id| counts[id] > threshold)
            .filter_map(|id| catalog.author(id))
            .collect();

        if authors.is_empty() {
            None
        } else {
            Some(authors)
        }
    }

    /// Magazine with the most articles across the whole catalog.
    ///
    /// `None` when no article exists. Ties go to the magazine constructed first.
    pub fn top_publisher(catalog: &Catalog) -> Option<&Magazine> {
        if catalog.articles().count() == 0 {
            return None;
        }

        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in catalog.magazines().all() {
            let count = catalog.article_count_for(magazine.id);
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((magazine, count)),
            }
        }

        best.map(|(magazine, _)| magazine)
    }
}

// ============================================================================
// MAGAZINE REGISTRY
// ============================================================================

/// Append-only registry of magazines, construction order
#[derive(Debug, Default)]
pub struct MagazineRegistry {
    magazines: Vec<Magazine>,
}

impl MagazineRegistry {
    pub fn new() -> Self {
        MagazineRegistry {
            magazines: Vec::new(),
        }
    }

    pub(crate) fn register(&mut self, magazine: Magazine) {
        debug!(
            "registered magazine {} ({:?}, {:?})",
            magazine.id, magazine.name, magazine.category
        );
        self.magazines.push(magazine);
    }

    pub fn get(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|m| m.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.iter_mut().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MagazineId) -> bool {
        self.get(id).is_some()
    }

    /// First magazine currently named exactly `name`
    pub fn find_by_name(&self, name: &str) -> Option<&Magazine> {
        self.magazines.iter().find(|m| m.name == name)
    }

    pub fn by_category(&self, category: &str) -> Vec<&Magazine> {
        self.magazines
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    pub fn all(&self) -> &[Magazine] {
        &self.magazines
    }

    pub fn count(&self) -> usize {
        self.magazines.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
