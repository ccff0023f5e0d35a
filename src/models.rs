use serde::Deserialize;

/// A single artwork as returned by the collection API.
///
/// Immutable once deserialized; the API uses `null` for unknown fields, so
/// every textual field is optional and display fallbacks live on the
/// accessors below.
#[derive(Debug, Clone, Deserialize)]
pub struct Artwork {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
    #[serde(default)]
    pub image_id: Option<String>,
}

impl Artwork {
    pub fn display_title(&self) -> &str {
        text_or(&self.title, "Untitled")
    }

    pub fn display_artist(&self) -> &str {
        text_or(&self.artist_display, "Unknown Artist")
    }

    pub fn display_place(&self) -> &str {
        text_or(&self.place_of_origin, "Unknown")
    }

    pub fn display_inscriptions(&self) -> &str {
        text_or(&self.inscriptions, "None")
    }

    /// Render the creation date range.
    ///
    /// A missing year (or year 0, which the API uses interchangeably) reads
    /// as "Unknown"; a collapsed range renders as a single value.
    pub fn date_range(&self) -> String {
        let start = year_label(self.date_start);
        let end = year_label(self.date_end);

        if start == end {
            start
        } else {
            format!("{} - {}", start, end)
        }
    }

    /// Whether the artwork has an image asset to derive a URL from
    pub fn has_image(&self) -> bool {
        matches!(&self.image_id, Some(id) if !id.is_empty())
    }
}

/// Fall back when a text field is absent or empty
fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => fallback,
    }
}

fn year_label(year: Option<i32>) -> String {
    match year {
        Some(y) if y != 0 => y.to_string(),
        _ => "Unknown".to_string(),
    }
}

/// The (page, limit) pair controlling which page of results is fetched.
///
/// `page` is 1-based, matching the API. Replacing the params is what
/// triggers a reload in the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: usize,
    pub limit: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork() -> Artwork {
        Artwork {
            id: 27992,
            title: Some("A Sunday on La Grande Jatte".to_string()),
            artist_display: Some("Georges Seurat".to_string()),
            place_of_origin: Some("France".to_string()),
            inscriptions: None,
            date_start: Some(1884),
            date_end: Some(1886),
            image_id: Some("1adf2696-8489-499b-cad2-821d7fde4b33".to_string()),
        }
    }

    #[test]
    fn test_display_fallbacks() {
        let mut a = artwork();
        a.title = None;
        a.artist_display = Some(String::new());
        a.place_of_origin = None;
        a.inscriptions = None;

        assert_eq!(a.display_title(), "Untitled");
        assert_eq!(a.display_artist(), "Unknown Artist");
        assert_eq!(a.display_place(), "Unknown");
        assert_eq!(a.display_inscriptions(), "None");
    }

    #[test]
    fn test_display_uses_present_values() {
        let a = artwork();
        assert_eq!(a.display_title(), "A Sunday on La Grande Jatte");
        assert_eq!(a.display_artist(), "Georges Seurat");
    }

    #[test]
    fn test_date_range_distinct_years() {
        let a = artwork();
        assert_eq!(a.date_range(), "1884 - 1886");
    }

    #[test]
    fn test_date_range_collapses_equal_years() {
        let mut a = artwork();
        a.date_start = Some(1900);
        a.date_end = Some(1900);
        assert_eq!(a.date_range(), "1900");
    }

    #[test]
    fn test_date_range_both_unknown() {
        let mut a = artwork();
        a.date_start = None;
        a.date_end = None;
        assert_eq!(a.date_range(), "Unknown");
    }

    #[test]
    fn test_date_range_partial() {
        let mut a = artwork();
        a.date_start = Some(1900);
        a.date_end = None;
        assert_eq!(a.date_range(), "1900 - Unknown");
    }

    #[test]
    fn test_year_zero_is_unknown() {
        let mut a = artwork();
        a.date_start = Some(0);
        a.date_end = Some(0);
        assert_eq!(a.date_range(), "Unknown");
    }

    #[test]
    fn test_has_image() {
        let mut a = artwork();
        assert!(a.has_image());
        a.image_id = Some(String::new());
        assert!(!a.has_image());
        a.image_id = None;
        assert!(!a.has_image());
    }
}
