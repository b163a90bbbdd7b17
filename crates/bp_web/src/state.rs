use std::sync::Arc;

use bp_cms::{BatchPublisher, CmsClient};
use bp_scrape::fetcher::{ArticleFetcher, HttpArticleFetcher, PageFetcher};

use crate::config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    pub pages: PageFetcher,
    pub fetcher: Arc<dyn ArticleFetcher>,
    pub cms: CmsClient,
    pub publisher: BatchPublisher,
}

impl AppState {
    /// Wires the production collaborators over one shared HTTP client.
    pub fn new(config: AppConfig) -> Self {
        let client = reqwest::Client::new();
        let pages = PageFetcher::new(client.clone());
        let fetcher: Arc<dyn ArticleFetcher> = Arc::new(HttpArticleFetcher::new(pages.clone()));
        let cms = CmsClient::new(client);
        let publisher = BatchPublisher::new(fetcher.clone(), cms.clone());

        Self {
            config,
            pages,
            fetcher,
            cms,
            publisher,
        }
    }
}
