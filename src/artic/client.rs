//! Artworks fetching and image URL assembly

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::artic::{ArticApi, ArticError, ArtworkApiResponse};
use crate::config::Config;
use crate::models::PaginationParams;

/// Source of artwork pages.
///
/// The TUI talks to the API through this seam so its state machine can be
/// driven by a stub in tests.
#[async_trait]
pub trait ArtworkSource {
    /// Fetch one page of artworks
    async fn fetch_page(&self, params: &PaginationParams)
        -> Result<ArtworkApiResponse, ArticError>;
}

/// HTTP client for the collection API
pub struct ArticClient {
    http: Client,
    base_url: String,
}

impl ArticClient {
    pub fn new(config: &Config) -> Result<Self, ArticError> {
        let http = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// URL for one page of artworks, page and limit as query parameters
    fn page_url(&self, params: &PaginationParams) -> String {
        format!(
            "{}?page={}&limit={}",
            self.base_url, params.page, params.limit
        )
    }

    async fn fetch_page_inner(
        &self,
        params: &PaginationParams,
    ) -> Result<ArtworkApiResponse, ArticError> {
        let url = self.page_url(params);
        debug!("Fetching artworks from: {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ArticError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ArtworkApiResponse>(&body)?;

        Ok(parsed)
    }
}

#[async_trait]
impl ArtworkSource for ArticClient {
    /// Fetch one page of artworks.
    ///
    /// All failure detail (transport, status, parse) is logged here and
    /// collapsed into the generic [`ArticError::Fetch`] for the caller.
    async fn fetch_page(
        &self,
        params: &PaginationParams,
    ) -> Result<ArtworkApiResponse, ArticError> {
        match self.fetch_page_inner(params).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!("Error fetching artworks: {}", e);
                Err(ArticError::Fetch)
            }
        }
    }
}

/// Derive the IIIF thumbnail URL for an artwork image.
///
/// Returns `None` when the artwork has no image. The base URL comes from
/// the API response's config block and is not validated.
pub fn image_url(image_id: Option<&str>, iiif_base_url: &str) -> Option<String> {
    match image_id {
        Some(id) if !id.is_empty() => Some(format!(
            "{}/{}/{}",
            iiif_base_url,
            id,
            ArticApi::IMAGE_SUFFIX
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ArticClient {
        ArticClient::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_page_url_encodes_page_and_limit() {
        let url = client().page_url(&PaginationParams { page: 3, limit: 25 });
        assert_eq!(
            url,
            "https://api.artic.edu/api/v1/artworks?page=3&limit=25"
        );
    }

    #[test]
    fn test_page_url_default_params() {
        let url = client().page_url(&PaginationParams::default());
        assert!(url.ends_with("?page=1&limit=10"));
    }

    #[test]
    fn test_image_url_none_without_image() {
        assert_eq!(image_url(None, "https://www.artic.edu/iiif/2"), None);
        assert_eq!(image_url(Some(""), "https://www.artic.edu/iiif/2"), None);
    }

    #[test]
    fn test_image_url_format() {
        assert_eq!(
            image_url(Some("123"), "https://x").as_deref(),
            Some("https://x/123/full/200,/0/default.jpg")
        );
    }
}
