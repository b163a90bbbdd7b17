pub mod entities;
pub mod extract;
pub mod feed;
pub mod fetcher;
pub mod rules;

pub use extract::extract_article;
pub use feed::scan_feed;
pub use fetcher::{ArticleFetcher, HttpArticleFetcher, PageFetcher};

pub mod prelude {
    pub use crate::fetcher::ArticleFetcher;
    pub use bp_core::{Error, ParsedArticle, Result};
}
