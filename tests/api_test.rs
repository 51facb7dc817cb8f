//! HTTP-level tests against the bundled sample dataset

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use hyakumi::data::Dataset;
use hyakumi::http::router;

fn app() -> Router {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let dataset = Dataset::load(&data_dir.join("foods.json"), &data_dir.join("metadata.json"))
        .expect("bundled dataset loads");
    router(Arc::new(dataset))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn food_ids(body: &Value) -> Vec<String> {
    body["contents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["foodId"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_foods_defaults() {
    let app = app();
    let (status, body) = get(&app, "/v1/foods").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCount"], 16);
    assert_eq!(body["offset"], 0);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["contents"].as_array().unwrap().len(), 10);

    let first = &body["contents"][0];
    assert_eq!(first["foodId"], "01088");
    assert_eq!(first["category"], "1");
    assert_eq!(first["nutrients"].as_array().unwrap().len(), 13);
    assert!(first.get("categoryCode").is_none());
}

#[tokio::test]
async fn test_category_where_order_query() {
    let app = app();
    let (status, body) = get(&app, "/v1/foods?category=8&where=WATER%3E90&order=-ENERC_KCAL&limit=2&offset=0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCount"], 1);
    assert_eq!(food_ids(&body), vec!["08039"]);
    assert_eq!(body["limit"], 2);
}

#[tokio::test]
async fn test_detail_with_nutrient_projection() {
    let app = app();
    let (status, body) = get(&app, "/v1/foods/18039?nutrients=ENERC_KCAL,WATER").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["foodId"], "18039");
    let nutrients = body["nutrients"].as_array().unwrap();
    assert_eq!(nutrients.len(), 2);
    assert_eq!(nutrients[0]["tagName"], "ENERC_KCAL");
    assert_eq!(nutrients[1]["tagName"], "WATER");
    assert_eq!(nutrients[1]["value"], 80.0);
    assert_eq!(nutrients[1]["estimated"], true);
    assert_eq!(nutrients[1]["isTraceAmount"], false);
    assert_eq!(nutrients[1]["unit"], "g");
}

#[tokio::test]
async fn test_missing_and_trace_values_serialize() {
    let app = app();
    let (_, body) = get(&app, "/v1/foods/17007?nutrients=FIB-").await;
    let fib = &body["nutrients"][0];
    assert_eq!(fib["value"], 0.0);
    assert_eq!(fib["isTraceAmount"], true);
    assert_eq!(fib["estimated"], true);

    let (_, body) = get(&app, "/v1/foods/16037?nutrients=FIB-").await;
    assert!(body["nutrients"][0]["value"].is_null());
}

#[tokio::test]
async fn test_unknown_food_is_404() {
    let app = app();
    let (status, body) = get(&app, "/v1/foods/99999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("99999"));
    assert!(body.get("contents").is_none());
    assert!(body.get("nutrients").is_none());
}

#[tokio::test]
async fn test_malformed_food_id_is_400() {
    let app = app();
    let (status, body) = get(&app, "/v1/foods/1803").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_bad_where_is_400_and_server_keeps_serving() {
    let app = app();
    let (status, body) = get(&app, "/v1/foods?where=BADFORMAT").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("BADFORMAT"));

    let (status, _) = get(&app, "/v1/foods").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_parameters_are_400() {
    let app = app();
    for uri in [
        "/v1/foods?category=19",
        "/v1/foods?nutrients=ENERC_KCAL,NOPE",
        "/v1/foods?order=NOPE",
        "/v1/foods?where=NOPE%3E1",
        "/v1/foods?offset=-1",
        "/v1/foods?limit=ten",
        "/v1/foods/18039?nutrients=NOPE",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn test_limit_is_clamped() {
    let app = app();
    let (status, body) = get(&app, "/v1/foods?limit=500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 100);
    assert_eq!(body["contents"].as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn test_descending_order_is_stable() {
    let app = app();
    // 01026 and 11123 both have 248 kcal
    let (_, body) = get(&app, "/v1/foods?order=-ENERC_KCAL&limit=3").await;
    assert_eq!(food_ids(&body), vec!["01026", "11123", "01088"]);
}

#[tokio::test]
async fn test_missing_values_sort_last_in_both_directions() {
    let app = app();
    for order in ["FIB-", "-FIB-"] {
        let (_, body) = get(&app, &format!("/v1/foods?order={order}&limit=100")).await;
        let ids = food_ids(&body);
        assert_eq!(&ids[14..], &["16037".to_string(), "18039".to_string()], "{order}");
    }
}

#[tokio::test]
async fn test_order_on_projected_out_tag_keeps_input_order() {
    let app = app();
    let (status, body) = get(&app, "/v1/foods?nutrients=WATER&order=-ENERC_KCAL&limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(food_ids(&body), vec!["01088", "01026", "02017"]);
    assert_eq!(body["contents"][0]["nutrients"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_pagination_past_end() {
    let app = app();
    let (status, body) = get(&app, "/v1/foods?offset=40").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCount"], 16);
    assert!(body["contents"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_food_name_filter() {
    let app = app();
    // 牛乳
    let (_, body) = get(&app, "/v1/foods?foodName=%E7%89%9B%E4%B9%B3").await;
    assert_eq!(food_ids(&body), vec!["13003"]);
}

#[tokio::test]
async fn test_health_and_nutrients() {
    let app = app();
    let (status, body) = get(&app, "/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], "hyakumi");
    assert_eq!(body["foodCount"], 16);
    assert_eq!(body["tagCount"], 13);

    let (status, body) = get(&app, "/v1/nutrients").await;
    assert_eq!(status, StatusCode::OK);
    let tags = body.as_array().unwrap();
    assert_eq!(tags.len(), 13);
    assert_eq!(tags[0]["tagName"], "ENERC_KCAL");
    assert_eq!(tags[0]["unit"], "kcal");
}
