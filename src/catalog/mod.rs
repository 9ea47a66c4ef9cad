pub mod schema;
pub mod seed;

pub use seed::{load_catalog, CatalogData};
