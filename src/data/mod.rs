//! Content compiled into the binary: the default catalogs and page copy.

mod articles;
mod properties;
pub mod site;

pub use articles::articles;
pub use properties::properties;
