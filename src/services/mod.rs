pub mod listing_service;
pub mod listing_service_impl;
pub use listing_service::{
    FilterOption, ListingError, ListingFilters, ListingQuery, ListingResults, ListingService,
};
pub use listing_service_impl::CatalogListingService;

pub mod blog_service;
pub mod blog_service_impl;
pub use blog_service::{BlogError, BlogQuery, BlogResults, BlogService};
pub use blog_service_impl::CatalogBlogService;

pub mod contact_service;
pub mod contact_service_impl;
pub use contact_service::{ContactError, ContactService};
pub use contact_service_impl::SimulatedContactService;

pub mod site_service;
pub use site_service::{HomePage, SiteService};
