use serde::Serialize;

use crate::models::format::{format_long_date, format_usd, group_thousands};
use crate::models::{Article, Property};
use crate::services::{BlogResults, ListingResults};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyDto {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub price: u64,
    pub price_display: String,
    pub beds: u32,
    pub baths: f32,
    pub sqft: u32,
    pub sqft_display: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub status: String,
    pub features: Vec<String>,
    pub description: String,
    pub image: String,
    pub featured: bool,
}

impl From<Property> for PropertyDto {
    fn from(p: Property) -> Self {
        Self {
            id: p.id.value(),
            price_display: format_usd(p.price),
            sqft_display: group_thousands(u64::from(p.sqft)),
            property_type: p.property_type.as_str().to_string(),
            status: p.status.as_str().to_string(),
            title: p.title,
            location: p.location,
            price: p.price,
            beds: p.beds,
            baths: p.baths,
            sqft: p.sqft,
            features: p.features,
            description: p.description,
            image: p.image,
            featured: p.featured,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub total: usize,
    pub sort: Option<String>,
    pub properties: Vec<PropertyDto>,
}

impl From<ListingResults> for ListingsResponse {
    fn from(results: ListingResults) -> Self {
        Self {
            total: results.total,
            sort: results.sort.map(|s| s.to_string()),
            properties: results.properties.into_iter().map(PropertyDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleDto {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    /// ISO date, e.g. `2024-01-15`.
    pub date: String,
    /// e.g. `January 15, 2024`.
    pub date_display: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl From<Article> for ArticleDto {
    fn from(a: Article) -> Self {
        Self {
            id: a.id.value(),
            date: a.date.format("%Y-%m-%d").to_string(),
            date_display: format_long_date(a.date),
            read_time: format!("{} min read", a.read_time),
            category: a.category.as_str().to_string(),
            title: a.title,
            excerpt: a.excerpt,
            content: a.content,
            author: a.author,
            tags: a.tags,
            featured: a.featured,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub total: usize,
    pub featured: Vec<ArticleDto>,
    pub regular: Vec<ArticleDto>,
}

impl From<BlogResults> for BlogResponse {
    fn from(results: BlogResults) -> Self {
        Self {
            total: results.total,
            featured: results.featured.into_iter().map(ArticleDto::from).collect(),
            regular: results.regular.into_iter().map(ArticleDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogCounts {
    pub properties: usize,
    pub articles: usize,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime: u64,
    pub catalogs: CatalogCounts,
    pub default_listing_sort: String,
}
