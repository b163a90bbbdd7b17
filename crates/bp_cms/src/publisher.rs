use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use uuid::Uuid;

use crate::client::CmsClient;
use bp_core::{
    BatchFailure, BatchOutcome, BatchResult, BatchSummary, CmsContentRecord, CmsProperties, Error,
    Result, SeoSettings,
};
use bp_scrape::entities;
use bp_scrape::fetcher::ArticleFetcher;

const CONTENT_TYPE: &str = "BlogPostPage";
const LOCALE: &str = "en";
const PUBLISHED: &str = "published";
const GRAPH_TYPE: &str = "article";

/// What happened to one URL after extraction.
enum ItemOutcome {
    /// Extraction came back without title or author; nothing was submitted.
    MissingFields,
    Created { title: String, content_key: String },
    CmsRejected { title: String, error: String },
}

/// Sequentially scrapes a list of URLs and creates one CMS content item
/// per successfully extracted article, collecting per-item outcomes. A
/// fixed courtesy delay separates CMS submissions; nothing is retried.
pub struct BatchPublisher {
    fetcher: Arc<dyn ArticleFetcher>,
    cms: CmsClient,
    delay: Duration,
}

impl BatchPublisher {
    pub fn new(fetcher: Arc<dyn ArticleFetcher>, cms: CmsClient) -> Self {
        Self {
            fetcher,
            cms,
            delay: Duration::from_secs(1),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Runs the whole batch to completion. Per-item failures are recorded
    /// and never abort the loop; only an empty URL list is rejected up
    /// front.
    pub async fn publish_all(
        &self,
        access_token: &str,
        cms_url: &str,
        container: &str,
        urls: &[String],
    ) -> Result<BatchResult> {
        if urls.is_empty() {
            return Err(Error::Validation("URLs array is required".to_string()));
        }

        let mut results: Vec<BatchOutcome> = Vec::new();
        let mut errors: Vec<BatchFailure> = Vec::new();

        for (i, url) in urls.iter().enumerate() {
            info!("Processing blog {}/{}: {}", i + 1, urls.len(), url);

            match self.publish_one(access_token, cms_url, container, url).await {
                Ok(ItemOutcome::Created { title, content_key }) => {
                    info!("✓ Successfully created: {}", title);
                    results.push(BatchOutcome {
                        url: url.clone(),
                        title,
                        success: true,
                        content_key,
                    });
                    tokio::time::sleep(self.delay).await;
                }
                Ok(ItemOutcome::CmsRejected { title, error: message }) => {
                    error!("✗ Failed to create: {}", title);
                    errors.push(BatchFailure {
                        url: url.clone(),
                        title: Some(title),
                        error: message,
                    });
                    tokio::time::sleep(self.delay).await;
                }
                Ok(ItemOutcome::MissingFields) => {
                    errors.push(BatchFailure {
                        url: url.clone(),
                        title: None,
                        error: "Missing required title or author".to_string(),
                    });
                }
                Err(e) => {
                    error!("✗ Error processing {}: {}", url, e);
                    errors.push(BatchFailure {
                        url: url.clone(),
                        title: None,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Bulk creation complete: {} successful, {} errors",
            results.len(),
            errors.len()
        );

        Ok(BatchResult {
            success: true,
            summary: BatchSummary {
                total: urls.len(),
                successful: results.len(),
                failed: errors.len(),
            },
            results,
            errors,
        })
    }

    async fn publish_one(
        &self,
        access_token: &str,
        cms_url: &str,
        container: &str,
        url: &str,
    ) -> Result<ItemOutcome> {
        let parsed = self.fetcher.fetch_article(url).await?;

        let (Some(title), Some(author)) = (parsed.title, parsed.author) else {
            return Ok(ItemOutcome::MissingFields);
        };

        let key = Uuid::new_v4().to_string();
        let record = CmsContentRecord {
            key: key.clone(),
            content_type: CONTENT_TYPE.to_string(),
            locale: LOCALE.to_string(),
            container: container.to_string(),
            status: PUBLISHED.to_string(),
            display_name: entities::decode(&title),
            properties: CmsProperties {
                heading: entities::decode(&title),
                article_sub_heading: entities::decode(&parsed.description),
                blog_post_body: parsed.content.unwrap_or_default(),
                article_author: entities::decode(&author),
                seo_settings: SeoSettings {
                    graph_type: GRAPH_TYPE.to_string(),
                },
            },
        };

        let response = self
            .cms
            .create_content(cms_url, access_token, &serde_json::to_value(&record)?)
            .await?;

        if response.is_success() {
            let content_key = response
                .body
                .get("key")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or(key);
            Ok(ItemOutcome::Created { title, content_key })
        } else {
            let message = response
                .body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error");
            Ok(ItemOutcome::CmsRejected {
                title,
                error: format!("Failed to create: {} - {}", response.status, message),
            })
        }
    }
}
