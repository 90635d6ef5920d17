pub mod catalog;
pub mod error;
pub mod format;
pub mod http;
pub mod model;
pub mod report;

// Re-export main types for convenience
pub use catalog::{CatalogClient, CatalogConfig, CatalogQuery, CatalogRecord, HomeFeed};
pub use error::{CatalogError, ErrorKind, RecordError};
pub use format::{DateStyle, format_duration, format_release_date, truncate_title};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use model::{
    ContentType, Discovery, DiscoveryDetails, DiscoveryVideo, Episode, VideoKind, artwork_url,
    genre_name,
};
pub use report::{CatalogEvent, NoopReporter, Reporter, SharedReporter};
