use reqwest::header;
use serde_json::Value;

use bp_core::Result;

/// Upstream status and JSON body, kept verbatim so handlers can relay them.
#[derive(Debug, Clone)]
pub struct CmsResponse {
    pub status: u16,
    pub body: Value,
}

impl CmsResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Thin client for the CMS preview2 REST API.
#[derive(Clone)]
pub struct CmsClient {
    client: reqwest::Client,
}

impl CmsClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Client-credentials grant against the CMS OAuth endpoint.
    pub async fn request_token(
        &self,
        cms_url: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<CmsResponse> {
        let response = self
            .client
            .post(format!("{cms_url}/_cms/preview2/oauth/token"))
            .basic_auth(client_id, Some(client_secret))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.json().await?;
        Ok(CmsResponse { status, body })
    }

    /// Bearer-authenticated content creation. `content` is passed through
    /// untouched so callers control the exact record shape.
    pub async fn create_content(
        &self,
        cms_url: &str,
        access_token: &str,
        content: &Value,
    ) -> Result<CmsResponse> {
        let response = self
            .client
            .post(format!("{cms_url}/_cms/preview2/content"))
            .bearer_auth(access_token)
            .header(header::ACCEPT, "application/json")
            .json(content)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.json().await?;
        Ok(CmsResponse { status, body })
    }
}
