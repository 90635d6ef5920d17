mod artwork;
mod discovery;
mod episode;
mod genre;
mod video;

pub use artwork::{PLACEHOLDER_ARTWORK_URL, artwork_url};
pub use discovery::{ContentType, Discovery, DiscoveryDetails};
pub use episode::Episode;
pub use genre::{FALLBACK_GENRE_NAME, genre_name};
pub use video::{DiscoveryVideo, VIDEO_SITE, VideoKind};
