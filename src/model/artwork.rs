/// Shown in place of missing artwork
pub const PLACEHOLDER_ARTWORK_URL: &str = "https://via.placeholder.com/600";

/// Size token embedded in catalog artwork URLs
const ARTWORK_SIZE_TOKEN: &str = "100x100";

/// Resize a catalog artwork URL to `size` x `size` pixels
///
/// The catalog serves 100x100 thumbnails whose URL embeds the size; other
/// sizes are available by rewriting that token. An empty template yields
/// the placeholder image.
pub fn artwork_url(template: &str, size: u32) -> String {
    if template.is_empty() {
        return PLACEHOLDER_ARTWORK_URL.to_string();
    }

    template.replace(ARTWORK_SIZE_TOKEN, &format!("{size}x{size}"))
}
