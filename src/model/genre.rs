/// Name shown for genre ids that are not in the table
pub const FALLBACK_GENRE_NAME: &str = "Discovery";

/// Human-readable name for a catalog genre id
pub fn genre_name(genre_id: u64) -> &'static str {
    match genre_id {
        50000061 => "Science",
        50000063 => "History",
        50000064 => "Philosophy",
        50000068 => "Nature",
        50000069 => "Education",
        50000041 => "Earth Sciences",
        50000059 => "Physics",
        1304 => "Arts",
        1402 => "Astronomy",
        1303 => "Biology",
        1301 => "Chemistry",
        1476 => "Geography",
        1477 => "Mathematics",
        1478 => "Technology",
        1479 => "Social Sciences",
        _ => FALLBACK_GENRE_NAME,
    }
}
