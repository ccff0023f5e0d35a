//! Shared artworks API types and data structures

use serde::Deserialize;

use crate::models::Artwork;

/// Artworks API response containing one page of results
#[derive(Debug, Deserialize)]
pub struct ArtworkApiResponse {
    /// Artworks on the requested page, in API order
    pub data: Vec<Artwork>,
    /// Pagination metadata for the whole result set
    pub pagination: Pagination,
    /// Response-level configuration
    pub config: ApiConfig,
}

/// Pagination metadata for an artworks response
#[derive(Debug, Deserialize)]
pub struct Pagination {
    /// Total number of records across all pages
    pub total: u64,
    /// Records per page
    pub limit: u32,
    /// Offset of the first record on this page
    pub offset: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// The page this response covers (1-based)
    pub current_page: u32,
}

/// Response-level configuration block
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Base URL for assembling IIIF image asset URLs
    pub iiif_url: String,
}

/// Artworks API endpoints and constants
pub struct ArticApi;

impl ArticApi {
    /// Base URL for the collection API
    pub const BASE_URL: &'static str = "https://api.artic.edu";
    /// Artworks listing endpoint
    pub const ARTWORKS_ENDPOINT: &'static str = "/api/v1/artworks";
    /// IIIF size/region/format suffix for table thumbnails
    pub const IMAGE_SUFFIX: &'static str = "full/200,/0/default.jpg";

    /// Full URL of the artworks listing endpoint
    pub fn artworks_url() -> String {
        format!("{}{}", Self::BASE_URL, Self::ARTWORKS_ENDPOINT)
    }
}
