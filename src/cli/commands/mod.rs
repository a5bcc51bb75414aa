mod blog;
mod listings;

pub use blog::cmd_blog;
pub use listings::{cmd_listing, cmd_listings};
