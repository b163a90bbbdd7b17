use async_trait::async_trait;
use reqwest::header;
use tracing::debug;

use crate::extract::extract_article;
use bp_core::{Error, ParsedArticle, Result};

/// Sent on every outbound scrape; some sites reject requests without a
/// realistic desktop browser user-agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP fetcher for target pages and feeds, over a shared client.
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        self.get(url, "Failed to fetch webpage").await
    }

    pub async fn fetch_feed(&self, url: &str) -> Result<String> {
        self.get(url, "Failed to fetch RSS feed").await
    }

    async fn get(&self, url: &str, failure: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::Upstream {
                status: response.status().as_u16(),
                message: failure.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Seam between orchestration and the network: fetch one page and run the
/// field extractor over it. Tests substitute canned implementations.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    async fn fetch_article(&self, url: &str) -> Result<ParsedArticle>;
}

pub struct HttpArticleFetcher {
    fetcher: PageFetcher,
}

impl HttpArticleFetcher {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch_article(&self, url: &str) -> Result<ParsedArticle> {
        let html = self.fetcher.fetch_page(url).await?;
        Ok(extract_article(&html))
    }
}
