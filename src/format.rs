use chrono::{DateTime, NaiveDate};

/// How much of a release date to spell out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// "January 5, 2024"
    Long,
    /// "Jan 5, 2024"
    Short,
}

/// Format a duration in milliseconds as `m:ss`
///
/// Minutes are not wrapped into hours, so a 75 minute episode reads `75:00`.
pub fn format_duration(millis: u64) -> String {
    let total_seconds = millis / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Format a catalog release date for display
///
/// Accepts RFC 3339 timestamps (what the catalog sends) and bare
/// `YYYY-MM-DD` dates. Returns `None` for anything else.
pub fn format_release_date(release_date: &str, style: DateStyle) -> Option<String> {
    let date = DateTime::parse_from_rfc3339(release_date)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(release_date, "%Y-%m-%d"))
        .ok()?;

    let pattern = match style {
        DateStyle::Long => "%B %-d, %Y",
        DateStyle::Short => "%b %-d, %Y",
    };

    Some(date.format(pattern).to_string())
}

/// Shorten a title to at most `max_len` characters, marking the cut with "..."
pub fn truncate_title(title: &str, max_len: usize) -> String {
    if title.chars().count() <= max_len {
        title.to_string()
    } else {
        let kept: String = title.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_pads_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(61_000), "1:01");
        assert_eq!(format_duration(1_800_000), "30:00");
    }

    #[test]
    fn duration_drops_partial_seconds() {
        assert_eq!(format_duration(59_999), "0:59");
    }

    #[test]
    fn duration_keeps_counting_minutes_past_an_hour() {
        assert_eq!(format_duration(4_500_000), "75:00");
    }

    #[test]
    fn release_date_long_style() {
        assert_eq!(
            format_release_date("2024-01-05T08:00:00Z", DateStyle::Long),
            Some("January 5, 2024".to_string())
        );
    }

    #[test]
    fn release_date_short_style() {
        assert_eq!(
            format_release_date("2019-03-08T08:00:00Z", DateStyle::Short),
            Some("Mar 8, 2019".to_string())
        );
    }

    #[test]
    fn release_date_accepts_plain_dates() {
        assert_eq!(
            format_release_date("2023-12-31", DateStyle::Long),
            Some("December 31, 2023".to_string())
        );
    }

    #[test]
    fn release_date_rejects_garbage() {
        assert_eq!(format_release_date("", DateStyle::Long), None);
        assert_eq!(format_release_date("last tuesday", DateStyle::Short), None);
    }

    #[test]
    fn truncate_keeps_short_titles() {
        assert_eq!(truncate_title("Science Vs", 40), "Science Vs");
    }

    #[test]
    fn truncate_cuts_long_titles() {
        assert_eq!(
            truncate_title("The Infinite Monkey Cage", 12),
            "The Infin..."
        );
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_title("Ünïcödé Tïtlé", 8), "Ünïcö...");
    }
}
