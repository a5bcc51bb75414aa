use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::{NumericKey, Record};
use crate::domain::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleCategory {
    #[serde(rename = "Market Analysis")]
    MarketAnalysis,
    #[serde(rename = "Buying Guide")]
    BuyingGuide,
    Investment,
    #[serde(rename = "Selling Tips")]
    SellingTips,
    Technology,
}

impl ArticleCategory {
    pub const ALL: [Self; 5] = [
        Self::MarketAnalysis,
        Self::BuyingGuide,
        Self::Investment,
        Self::SellingTips,
        Self::Technology,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MarketAnalysis => "Market Analysis",
            Self::BuyingGuide => "Buying Guide",
            Self::Investment => "Investment",
            Self::SellingTips => "Selling Tips",
            Self::Technology => "Technology",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: RecordId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    pub category: ArticleCategory,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleMetric {
    ReadTime,
    Date,
}

impl NumericKey for ArticleMetric {
    const ALL: &'static [Self] = &[Self::Date, Self::ReadTime];

    fn name(&self) -> &'static str {
        match self {
            Self::ReadTime => "read_time",
            Self::Date => "date",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::ReadTime => &["readtime", "length"],
            Self::Date => &["published"],
        }
    }
}

pub const FACET_CATEGORY: &str = "category";
pub const FACET_AUTHOR: &str = "author";

impl Record for Article {
    type Key = ArticleMetric;

    const FACETS: &'static [&'static str] = &[FACET_CATEGORY, FACET_AUTHOR];

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    /// Articles are searched by title, excerpt and tags; the body is not.
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.tags.len());
        fields.push(self.title.as_str());
        fields.push(self.excerpt.as_str());
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn facet_value(&self, facet: &str) -> Option<&str> {
        if facet.eq_ignore_ascii_case(FACET_CATEGORY) {
            Some(self.category.as_str())
        } else if facet.eq_ignore_ascii_case(FACET_AUTHOR) {
            Some(&self.author)
        } else {
            None
        }
    }

    fn numeric(&self, key: ArticleMetric) -> f64 {
        match key {
            ArticleMetric::ReadTime => f64::from(self.read_time),
            ArticleMetric::Date => f64::from(self.date.num_days_from_ce()),
        }
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Query, SortKey, search};
    use crate::data;

    #[test]
    fn tags_are_searchable() {
        let articles = data::articles();
        let results = search(&articles, &Query::new().text("home staging"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.value(), 4);
    }

    #[test]
    fn body_is_not_searchable() {
        // Only post 6's body mentions "expectation".
        let articles = data::articles();
        assert!(search(&articles, &Query::new().text("expectation")).is_empty());
    }

    #[test]
    fn category_facet_uses_display_name() {
        let articles = data::articles();
        let results = search(&articles, &Query::new().facet("category", "market analysis"));
        let ids: Vec<u32> = results.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn newest_first_by_date() {
        let articles = data::articles();
        let results = search(&articles, &Query::new().sort(SortKey::parse("date-desc")));
        assert_eq!(results.first().map(|a| a.id.value()), Some(1));
        assert_eq!(results.last().map(|a| a.id.value()), Some(6));
    }

    #[test]
    fn articles_have_no_range_buckets() {
        assert_eq!(Article::bucket("1m-2m"), None);
    }
}
