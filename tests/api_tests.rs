use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use lionhomes::config::Config;
use serde_json::Value;
use tower::ServiceExt;

fn spawn_app() -> Router {
    let state = lionhomes::api::create_app_state_from_config(Config::default(), None)
        .expect("Failed to create app state");
    lionhomes::api::router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn ids(items: &Value) -> Vec<u64> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_listings_default_sort() {
    let app = spawn_app();
    let (status, body) = get(&app, "/api/listings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 6);
    assert_eq!(body["data"]["sort"], "price-desc");
    assert_eq!(ids(&body["data"]["properties"]), vec![3, 6, 2, 4, 5, 1]);
}

#[tokio::test]
async fn test_listings_price_bucket_ascending() {
    let app = spawn_app();
    let (status, body) = get(&app, "/api/listings?price_range=1m-2m&sort=price-asc").await;

    assert_eq!(status, StatusCode::OK);
    let properties = &body["data"]["properties"];
    assert_eq!(ids(properties), vec![1, 5, 4]);
    assert_eq!(properties[0]["price_display"], "$1,250,000");
    assert_eq!(properties[0]["sqft_display"], "3,200");
}

#[tokio::test]
async fn test_listings_text_and_type() {
    let app = spawn_app();

    let (_, body) = get(&app, "/api/listings?q=ESTATE&sort=price_asc").await;
    assert_eq!(ids(&body["data"]["properties"]), vec![1, 6]);

    let (_, body) = get(&app, "/api/listings?type=villa").await;
    assert_eq!(ids(&body["data"]["properties"]), vec![1]);

    let (_, body) = get(&app, "/api/listings?type=all&price_range=all").await;
    assert_eq!(body["data"]["total"], 6);
}

#[tokio::test]
async fn test_listings_unknown_values() {
    let app = spawn_app();

    let (status, body) = get(&app, "/api/listings?type=castle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["properties"], Value::Array(vec![]));

    let (_, body) = get(&app, "/api/listings?sort=newest").await;
    assert_eq!(ids(&body["data"]["properties"]), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_listing_lookup() {
    let app = spawn_app();

    let (status, body) = get(&app, "/api/listings/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Contemporary Family Home");
    assert_eq!(body["data"]["type"], "House");

    let (status, body) = get(&app, "/api/listings/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = get(&app, "/api/listings/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_featured_and_filters() {
    let app = spawn_app();

    let (_, body) = get(&app, "/api/listings/featured").await;
    assert_eq!(ids(&body["data"]), vec![1, 2, 3]);

    let (status, body) = get(&app, "/api/listings/filters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price_ranges"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["sort_options"][0]["value"], "price-desc");
}

#[tokio::test]
async fn test_blog_search() {
    let app = spawn_app();

    let (status, body) = get(&app, "/api/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"]["featured"]), vec![1, 3]);
    assert_eq!(ids(&body["data"]["regular"]), vec![2, 4, 5, 6]);

    let (_, body) = get(&app, "/api/blog?q=luxury").await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(ids(&body["data"]["featured"]), vec![3]);

    let (_, body) = get(&app, "/api/blog?category=Market%20Analysis").await;
    assert_eq!(body["data"]["total"], 2);
}

#[tokio::test]
async fn test_blog_article_and_categories() {
    let app = spawn_app();

    let (status, body) = get(&app, "/api/blog/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["date_display"], "January 15, 2024");
    assert_eq!(body["data"]["category"], "Market Analysis");

    let (status, _) = get(&app, "/api/blog/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(&app, "/api/blog/categories").await;
    assert_eq!(body["data"][0], "all");
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_site_pages() {
    let app = spawn_app();

    let (status, body) = get(&app, "/api/site/home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["agency"], "Lion Homes");
    assert_eq!(ids(&body["data"]["featured_properties"]), vec![1, 2, 3]);

    for page in ["about", "services", "contact", "navigation"] {
        let (status, body) = get(&app, &format!("/api/site/{page}")).await;
        assert_eq!(status, StatusCode::OK, "{page}");
        assert_eq!(body["success"], true, "{page}");
    }

    let (_, body) = get(&app, "/api/site/navigation").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
    assert_eq!(body["data"][4]["icon"], "book-open");
}

#[tokio::test]
async fn test_contact_submission() {
    let app = spawn_app();

    let (status, body) = post_json(
        &app,
        "/api/contact",
        serde_json::json!({
            "name": "Jane Buyer",
            "email": "jane@example.com",
            "subject": "Property Buying",
            "contact_method": "phone",
            "message": "I'd like to view the villa."
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["message"],
        "Message sent successfully! We'll get back to you within 24 hours."
    );
    assert!(body["data"]["reference"].is_string());
}

#[tokio::test]
async fn test_contact_validation() {
    let app = spawn_app();

    let (status, body) = post_json(
        &app,
        "/api/contact",
        serde_json::json!({
            "name": "Jane Buyer",
            "email": "not-an-email",
            "message": "Hello"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = post_json(
        &app,
        "/api/contact",
        serde_json::json!({ "email": "jane@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_system_status() {
    let app = spawn_app();

    let (status, body) = get(&app, "/api/system/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["catalogs"]["properties"], 6);
    assert_eq!(body["data"]["catalogs"]["articles"], 6);
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_metrics_disabled() {
    let app = spawn_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("Metrics not enabled"));
}
