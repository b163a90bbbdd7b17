use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::AppState;
use bp_core::{BatchResult, Error, ParsedArticle};
use bp_scrape::feed::scan_feed;

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<AppConfig> {
    Json(state.config.clone())
}

#[derive(Debug, Deserialize)]
pub struct ParseUrlRequest {
    pub url: Option<String>,
}

pub async fn parse_url(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ParseUrlRequest>,
) -> Result<Json<ParsedArticle>, ApiError> {
    let url = req
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| Error::Validation("URL is required".to_string()))?;
    let article = state.fetcher.fetch_article(&url).await?;
    Ok(Json(article))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPostsRequest {
    pub rss_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecentPostsResponse {
    pub urls: Vec<String>,
}

pub async fn get_recent_posts(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecentPostsRequest>,
) -> Result<Json<RecentPostsResponse>, ApiError> {
    let rss_url = req
        .rss_url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| Error::Validation("URL is required".to_string()))?;
    info!("Fetching recent posts from RSS URL: {}", rss_url);
    let xml = state.pages.fetch_feed(&rss_url).await?;
    let urls = scan_feed(&xml)?;
    Ok(Json(RecentPostsResponse { urls }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAllBlogsRequest {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub cms_url: String,
    #[serde(default)]
    pub container_uuid: String,
    pub urls: Option<Vec<String>>,
}

pub async fn create_all_blogs(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAllBlogsRequest>,
) -> Result<Json<BatchResult>, ApiError> {
    let urls = req
        .urls
        .filter(|u| !u.is_empty())
        .ok_or_else(|| Error::Validation("URLs array is required".to_string()))?;
    let result = state
        .publisher
        .publish_all(&req.access_token, &req.cms_url, &req.container_uuid, &urls)
        .await?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub cms_url: String,
}

/// Forwards a client-credentials grant to the CMS and relays its status
/// and body verbatim.
pub async fn token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TokenRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let response = state
        .cms
        .request_token(&req.cms_url, &req.client_id, &req.client_secret)
        .await?;
    Ok((relay_status(response.status), Json(response.body)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub cms_url: String,
    #[serde(default)]
    pub blog_content: Value,
}

/// Forwards an already-built content record to the CMS, relaying the
/// upstream response verbatim.
pub async fn content(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContentRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let response = state
        .cms
        .create_content(&req.cms_url, &req.access_token, &req.blog_content)
        .await?;
    Ok((relay_status(response.status), Json(response.body)))
}

fn relay_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
