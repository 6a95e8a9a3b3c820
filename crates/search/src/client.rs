//! Paginated code search client

use crate::rate_limit::{is_rate_limit_status, rate_limit_wait};
use crate::types::{SearchHit, SearchResponse};
use figrefs_core::config::{SearchConfig, MAX_PER_PAGE};
use figrefs_core::error::{Error, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, Response, StatusCode};
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Characters of an error response body echoed to the log
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// Client for the hosted code search endpoint
pub struct SearchClient {
    client: Client,
    endpoint: String,
    query: String,
    accept: String,
    token: Option<String>,
}

impl SearchClient {
    /// Create a new search client
    ///
    /// # Arguments
    /// * `config` - Endpoint, query and header settings
    /// * `token` - Optional bearer token sent as `Authorization`
    pub fn new(config: &SearchConfig, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::search(format!("Failed to create HTTP client: {e}")))?;

        debug!(
            endpoint = %config.endpoint,
            authenticated = token.is_some(),
            "Search client initialized"
        );

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            query: config.query.clone(),
            accept: config.accept.clone(),
            token,
        })
    }

    /// Fetch up to `max_pages` pages of `per_page` hits each
    ///
    /// Pagination stops early on a failed request, an empty page, or a short
    /// page; hits gathered before the stop are kept. A rate-limited page is
    /// retried exactly once, after sleeping past the reset time when the
    /// quota is exhausted.
    pub async fn search_code(&self, max_pages: usize, per_page: usize) -> Vec<SearchHit> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        let mut all_items = Vec::new();

        for page in 1..=max_pages {
            info!("[Search] Page {page}/{max_pages} …");

            let items = match self.fetch_page_with_retry(page, per_page).await {
                Ok(items) => items,
                Err(e) => {
                    warn!("  ⚠️ GitHub search failed: {e}");
                    break;
                }
            };

            info!("  Found {} items on this page.", items.len());
            if items.is_empty() {
                break;
            }

            let short_page = items.len() < per_page;
            all_items.extend(items);
            if short_page {
                break;
            }
        }

        info!("[Search] Total items collected: {}", all_items.len());
        all_items
    }

    async fn fetch_page_with_retry(&self, page: usize, per_page: usize) -> Result<Vec<SearchHit>> {
        let mut response = self.send(page, per_page).await?;

        if is_rate_limit_status(response.status()) {
            if let Some(wait) = rate_limit_wait(response.headers(), SystemTime::now()) {
                info!(
                    "Hit GitHub rate limit. Sleeping for {} seconds until reset...",
                    wait.as_secs()
                );
                tokio::time::sleep(wait).await;
            }
            response = self.send(page, per_page).await?;
        }

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
            return Err(Error::search(format!("status {}: {preview}", status.as_u16())));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::search(format!("Failed to parse search response: {e}")))?;

        Ok(parsed.items)
    }

    async fn send(&self, page: usize, per_page: usize) -> Result<Response> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, &self.accept)
            .query(&[
                ("q", self.query.clone()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ]);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .await
            .map_err(|e| Error::search(format!("Search request failed: {e}")))
    }
}
