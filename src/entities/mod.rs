// Entity Models - Author, Magazine, Article
//
// Each entity has:
// - Stable identity (UUID) that NEVER changes
// - Validated values (see validation.rs)
// - Registry for lookups, owned by a Catalog
//
// Articles are the only link between authors and magazines. Every
// relationship query is a scan of the article registry.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

pub mod article;
pub mod author;
pub mod magazine;

pub use article::{Article, ArticleRegistry};
pub use author::{Author, AuthorRegistry};
pub use magazine::{Magazine, MagazineRegistry};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub(crate) fn new() -> Self {
                $name(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Identity of an Author
    AuthorId
);
entity_id!(
    /// Identity of a Magazine
    MagazineId
);
entity_id!(
    /// Identity of an Article
    ArticleId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = AuthorId::new();
        let b = AuthorId::new();

        assert_ne!(a, b);
        assert!(!a.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display_is_uuid() {
        let id = MagazineId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
