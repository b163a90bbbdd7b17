use serde::{Deserialize, Serialize};

/// Fields extracted from a single blog page. `display_name` comes from the
/// `og:title` meta tag while `title` is the first `<h1>`; downstream
/// submission keys off `title`/`author` being present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedArticle {
    pub display_name: Option<String>,
    pub title: Option<String>,
    pub description: String,
    pub author: Option<String>,
    pub content: Option<String>,
    pub image: String,
}

/// Payload for the CMS content-creation endpoint. Property names match the
/// CMS content type definition, hence the PascalCase renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsContentRecord {
    pub key: String,
    pub content_type: String,
    pub locale: String,
    pub container: String,
    pub status: String,
    pub display_name: String,
    pub properties: CmsProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsProperties {
    #[serde(rename = "Heading")]
    pub heading: String,
    #[serde(rename = "ArticleSubHeading")]
    pub article_sub_heading: String,
    #[serde(rename = "BlogPostBody")]
    pub blog_post_body: String,
    #[serde(rename = "ArticleAuthor")]
    pub article_author: String,
    #[serde(rename = "SeoSettings")]
    pub seo_settings: SeoSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoSettings {
    #[serde(rename = "GraphType")]
    pub graph_type: String,
}

/// One successfully created content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub url: String,
    pub title: String,
    pub success: bool,
    pub content_key: String,
}

/// One URL that failed somewhere between fetch and CMS submission. `title`
/// is only known when extraction succeeded before the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFailure {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Final state of one batch invocation. Every input URL lands in exactly
/// one of `results` or `errors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub success: bool,
    pub results: Vec<BatchOutcome>,
    pub errors: Vec<BatchFailure>,
    pub summary: BatchSummary,
}
