//! Catalog-backed implementation of the `BlogService` trait.

use tracing::debug;

use crate::catalog::{Query, RecordStore, SortKey, partition_featured, predicate};
use crate::domain::RecordId;
use crate::models::article::{ArticleMetric, FACET_AUTHOR, FACET_CATEGORY};
use crate::models::{Article, ArticleCategory};
use crate::services::blog_service::{BlogError, BlogQuery, BlogResults, BlogService};

pub struct CatalogBlogService {
    store: RecordStore<Article>,
}

impl CatalogBlogService {
    #[must_use]
    pub const fn new(store: RecordStore<Article>) -> Self {
        Self { store }
    }
}

impl BlogService for CatalogBlogService {
    fn search(&self, request: &BlogQuery) -> BlogResults {
        let mut query: Query<ArticleMetric> = Query::new()
            .text(request.q.as_deref().unwrap_or_default())
            .sort(request.sort.as_deref().and_then(SortKey::parse));

        if let Some(category) = &request.category {
            query = query.facet(FACET_CATEGORY, category.as_str());
        }
        if let Some(author) = &request.author {
            query = query.facet(FACET_AUTHOR, author.as_str());
        }

        let split = partition_featured(self.store.search(&query));
        debug!(
            q = query.text.as_str(),
            featured = split.featured.len(),
            regular = split.regular.len(),
            "Blog search"
        );

        BlogResults {
            total: split.total(),
            featured: split.featured,
            regular: split.regular,
        }
    }

    fn get(&self, id: RecordId) -> Result<Article, BlogError> {
        self.store.get(id).cloned().ok_or(BlogError::NotFound(id))
    }

    fn categories(&self) -> Vec<String> {
        std::iter::once(predicate::ALL.to_string())
            .chain(ArticleCategory::ALL.iter().map(|c| c.as_str().to_string()))
            .collect()
    }

    fn count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticSource;
    use crate::data;

    fn service() -> CatalogBlogService {
        CatalogBlogService::new(
            RecordStore::load(&StaticSource::new("articles", data::articles)).unwrap(),
        )
    }

    fn ids(articles: &[Article]) -> Vec<u32> {
        articles.iter().map(|a| a.id.value()).collect()
    }

    #[test]
    fn empty_query_splits_featured_and_regular() {
        let results = service().search(&BlogQuery::default());
        assert_eq!(results.total, 6);
        assert_eq!(ids(&results.featured), vec![1, 3]);
        assert_eq!(ids(&results.regular), vec![2, 4, 5, 6]);
    }

    #[test]
    fn luxury_finds_post_three() {
        let results = service().search(&BlogQuery {
            q: Some("luxury".to_string()),
            ..Default::default()
        });
        assert_eq!(results.total, 1);
        assert_eq!(ids(&results.featured), vec![3]);
        assert!(results.regular.is_empty());
    }

    #[test]
    fn category_and_text_combine() {
        let results = service().search(&BlogQuery {
            q: Some("tips".to_string()),
            category: Some("Selling Tips".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&results.regular), vec![4]);
    }

    #[test]
    fn author_filter() {
        let results = service().search(&BlogQuery {
            author: Some("michael chen".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&results.regular), vec![2, 5]);
        assert!(results.featured.is_empty());
    }

    #[test]
    fn read_time_sort() {
        let results = service().search(&BlogQuery {
            sort: Some("read_time-asc".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&results.featured), vec![1, 3]);
        assert_eq!(ids(&results.regular), vec![4, 6, 5, 2]);
    }

    #[test]
    fn categories_start_with_all() {
        let categories = service().categories();
        assert_eq!(categories.first().map(String::as_str), Some("all"));
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn missing_article() {
        assert!(matches!(
            service().get(RecordId::new(0)),
            Err(BlogError::NotFound(_))
        ));
    }
}
