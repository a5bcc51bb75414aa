pub mod article;
pub mod contact;
pub mod format;
pub mod property;
pub mod site;

pub use article::{Article, ArticleCategory, ArticleMetric};
pub use contact::{ContactMethod, ContactReceipt, ContactRequest};
pub use property::{ListingStatus, Property, PropertyMetric, PropertyType};
