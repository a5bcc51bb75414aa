use chrono::NaiveDate;

use crate::domain::RecordId;
use crate::models::article::{Article, ArticleCategory};

struct Seed {
    id: u32,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    author: &'static str,
    date: (i32, u32, u32),
    read_time: u32,
    category: ArticleCategory,
    tags: &'static [&'static str],
    featured: bool,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        title: "2024 Real Estate Market Trends: What Buyers Need to Know",
        excerpt: "Discover the latest market trends shaping the real estate landscape in 2024, including interest rates, inventory levels, and buyer behavior patterns.",
        content: "The real estate market in 2024 continues to evolve with changing economic conditions...",
        author: "Sarah Johnson",
        date: (2024, 1, 15),
        read_time: 8,
        category: ArticleCategory::MarketAnalysis,
        tags: &["market trends", "buying tips", "2024 forecast"],
        featured: true,
    },
    Seed {
        id: 2,
        title: "First-Time Homebuyer's Complete Guide to Success",
        excerpt: "Navigate the home buying process with confidence using our comprehensive guide designed specifically for first-time buyers.",
        content: "Buying your first home is an exciting milestone, but it can also feel overwhelming...",
        author: "Michael Chen",
        date: (2024, 1, 12),
        read_time: 12,
        category: ArticleCategory::BuyingGuide,
        tags: &["first-time buyers", "home buying", "tips"],
        featured: false,
    },
    Seed {
        id: 3,
        title: "Luxury Property Investment: Maximizing Returns in High-End Markets",
        excerpt: "Learn proven strategies for investing in luxury real estate and understand the unique dynamics of high-end property markets.",
        content: "Luxury real estate investment requires a different approach than traditional property investment...",
        author: "Emily Rodriguez",
        date: (2024, 1, 10),
        read_time: 10,
        category: ArticleCategory::Investment,
        tags: &["luxury properties", "investment", "returns"],
        featured: true,
    },
    Seed {
        id: 4,
        title: "Home Staging Secrets: Sell Your Property Faster",
        excerpt: "Professional staging tips that can help your property stand out in the market and attract serious buyers quickly.",
        content: "Home staging is one of the most effective ways to sell your property faster and for more money...",
        author: "Sarah Johnson",
        date: (2024, 1, 8),
        read_time: 6,
        category: ArticleCategory::SellingTips,
        tags: &["home staging", "selling", "tips"],
        featured: false,
    },
    Seed {
        id: 5,
        title: "Understanding Property Valuations: What Determines Your Home's Worth",
        excerpt: "Get insights into the factors that influence property valuations and learn how to accurately assess your home's market value.",
        content: "Property valuation is both an art and a science, involving multiple factors...",
        author: "Michael Chen",
        date: (2024, 1, 5),
        read_time: 9,
        category: ArticleCategory::MarketAnalysis,
        tags: &["valuation", "market value", "assessment"],
        featured: false,
    },
    Seed {
        id: 6,
        title: "Smart Home Technology: Adding Value to Your Property",
        excerpt: "Explore how smart home technologies can increase your property value and appeal to modern buyers.",
        content: "Smart home technology has evolved from a luxury to an expectation for many homebuyers...",
        author: "Emily Rodriguez",
        date: (2024, 1, 3),
        read_time: 7,
        category: ArticleCategory::Technology,
        tags: &["smart home", "technology", "property value"],
        featured: false,
    },
];

/// Blog posts, newest first as the blog page declares them.
#[must_use]
pub fn articles() -> Vec<Article> {
    SEEDS
        .iter()
        .filter_map(|seed| {
            let (y, m, d) = seed.date;
            Some(Article {
                id: RecordId::new(seed.id),
                title: seed.title.to_string(),
                excerpt: seed.excerpt.to_string(),
                content: seed.content.to_string(),
                author: seed.author.to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                read_time: seed.read_time,
                category: seed.category,
                tags: seed.tags.iter().map(|t| (*t).to_string()).collect(),
                featured: seed.featured,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_seed_has_a_valid_date() {
        assert_eq!(articles().len(), SEEDS.len());
    }
}
