//! Domain service for blog articles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::RecordId;
use crate::models::Article;

/// Blog page filter state. `category` uses the display name, e.g.
/// `Market Analysis`; `all` or a missing value leaves it off.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub sort: Option<String>,
}

/// Matching articles, split into the blog page's two sections.
#[derive(Debug, Clone, Serialize)]
pub struct BlogResults {
    pub total: usize,
    pub featured: Vec<Article>,
    pub regular: Vec<Article>,
}

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Article {0} not found")]
    NotFound(RecordId),
}

pub trait BlogService: Send + Sync {
    fn search(&self, query: &BlogQuery) -> BlogResults;

    fn get(&self, id: RecordId) -> Result<Article, BlogError>;

    /// `all` followed by every category, in the blog page's order.
    fn categories(&self) -> Vec<String>;

    fn count(&self) -> usize;
}
