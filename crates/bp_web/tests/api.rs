use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_string, header as req_header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bp_web::{create_app, AppConfig, AppState};

async fn app(config: AppConfig) -> Router {
    create_app(AppState::new(config)).await
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn config_returns_the_injected_credentials() {
    let app = app(AppConfig {
        client_id: "id".into(),
        client_secret: "secret".into(),
        cms_url: "https://cms.example.com".into(),
    })
    .await;

    let response = app
        .oneshot(Request::builder().uri("/config").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "clientId": "id",
            "clientSecret": "secret",
            "cmsUrl": "https://cms.example.com"
        })
    );
}

#[tokio::test]
async fn posting_to_config_is_method_not_allowed() {
    let app = app(AppConfig::default()).await;
    let response = app
        .oneshot(post_json("/config", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn parse_url_requires_a_url() {
    let app = app(AppConfig::default()).await;
    let response = app.oneshot(post_json("/parse-url", json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await, json!({ "error": "URL is required" }));
}

#[tokio::test]
async fn parse_url_extracts_fields_from_the_fetched_page() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/insights/blog/post"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head>
                <meta property="og:title" content="Social Name">
                <meta property="article:author" content="Jane">
            </head><body>
                <h1>The Heading</h1>
                <article class="blog-post__main-content"><p>Body text</p></article>
            </body></html>"#,
        ))
        .mount(&site)
        .await;

    let app = app(AppConfig::default()).await;
    let response = app
        .oneshot(post_json(
            "/parse-url",
            json!({ "url": format!("{}/insights/blog/post", site.uri()) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["displayName"], "Social Name");
    assert_eq!(body["title"], "The Heading");
    assert_eq!(body["author"], "Jane");
    assert_eq!(body["content"], "<p>Body text</p>");
    assert_eq!(body["description"], "");
    assert_eq!(body["image"], "");
}

#[tokio::test]
async fn parse_url_relays_the_upstream_fetch_status() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&site)
        .await;

    let app = app(AppConfig::default()).await;
    let response = app
        .oneshot(post_json("/parse-url", json!({ "url": site.uri() })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Failed to fetch webpage" })
    );
}

#[tokio::test]
async fn recent_posts_returns_qualifying_feed_urls_in_order() {
    let feed = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<?xml version="1.0"?><feed xmlns="http://www.w3.org/2005/Atom">
                <entry><id>https://example.com/insights/blog/one</id></entry>
                <entry><id>https://example.com/en/insights/blog/skipped</id></entry>
                <entry><id>https://example.com/insights/blog/two</id></entry>
            </feed>"#,
        ))
        .mount(&feed)
        .await;

    let app = app(AppConfig::default()).await;
    let response = app
        .oneshot(post_json(
            "/get-recent-posts",
            json!({ "rssUrl": format!("{}/feed.xml", feed.uri()) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "urls": [
                "https://example.com/insights/blog/one",
                "https://example.com/insights/blog/two"
            ]
        })
    );
}

#[tokio::test]
async fn recent_posts_requires_an_rss_url() {
    let app = app(AppConfig::default()).await;
    let response = app
        .oneshot(post_json("/get-recent-posts", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_all_blogs_requires_a_nonempty_url_list() {
    let app = app(AppConfig::default()).await;

    for body in [json!({}), json!({ "urls": [] })] {
        let response = app
            .clone()
            .oneshot(post_json("/create-all-blogs", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "URLs array is required" })
        );
    }
}

#[tokio::test]
async fn token_forwards_the_grant_and_relays_the_upstream_response() {
    let cms = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/_cms/preview2/oauth/token"))
        .and(body_string("grant_type=client_credentials"))
        .and(req_header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "token_type": "Bearer"
        })))
        .mount(&cms)
        .await;

    let app = app(AppConfig::default()).await;
    let response = app
        .oneshot(post_json(
            "/token",
            json!({ "clientId": "id", "clientSecret": "secret", "cmsUrl": cms.uri() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "access_token": "tok", "token_type": "Bearer" })
    );
}

#[tokio::test]
async fn token_relays_an_upstream_rejection_verbatim() {
    let cms = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/_cms/preview2/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_client" })))
        .mount(&cms)
        .await;

    let app = app(AppConfig::default()).await;
    let response = app
        .oneshot(post_json(
            "/token",
            json!({ "clientId": "bad", "clientSecret": "bad", "cmsUrl": cms.uri() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({ "error": "invalid_client" }));
}

#[tokio::test]
async fn content_forwards_the_record_with_bearer_auth() {
    let cms = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/_cms/preview2/content"))
        .and(req_header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "key": "abc" })))
        .mount(&cms)
        .await;

    let app = app(AppConfig::default()).await;
    let response = app
        .oneshot(post_json(
            "/content",
            json!({
                "accessToken": "tok",
                "cmsUrl": cms.uri(),
                "blogContent": { "displayName": "Post" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await, json!({ "key": "abc" }));

    let requests = cms.received_requests().await.unwrap();
    let forwarded: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(forwarded, json!({ "displayName": "Post" }));
}
