mod client;
mod config;
mod query;
mod record;

pub use client::{CatalogClient, HOME_CATEGORIES, HomeFeed};
pub use config::{CatalogConfig, DEFAULT_BASE_URL};
pub use query::{CatalogQuery, related_keywords};
pub use record::{CatalogRecord, CatalogResponse, RawId};
