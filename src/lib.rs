// Masthead - Core Library
// Authors, magazines and the articles that join them.
//
// Every relationship (an author's magazines, a magazine's contributors, the
// top publisher) is derived on demand from the article registry of a Catalog.

pub mod catalog;
pub mod config;
pub mod entities;
pub mod validation;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogSnapshot};
pub use config::Limits;
pub use entities::{
    Article, ArticleId, ArticleRegistry,
    Author, AuthorId, AuthorRegistry,
    Magazine, MagazineId, MagazineRegistry,
};
pub use validation::{CatalogError, CatalogResult, LengthRange};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
