pub mod error;
pub mod types;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use types::{
    BatchFailure, BatchOutcome, BatchResult, BatchSummary, CmsContentRecord, CmsProperties,
    ParsedArticle, SeoSettings,
};
