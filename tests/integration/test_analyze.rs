use super::helpers::{analyze_request, expect_status, read_json, send, spawn_app};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};

#[tokio::test]
async fn analyze_returns_exact_statistics_for_known_regions() {
    let app = spawn_app();

    let req = analyze_request(&json!({
        "regions": ["apac", "emea", "amer"],
        "threshold_ms": 200.0
    }));
    let res = expect_status(send(&app, req).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(body["total_regions"], json!(3));
    assert_eq!(body["threshold_ms"].as_f64(), Some(200.0));

    let regions = body["regions"].as_array().expect("regions should be an array");
    assert_eq!(regions.len(), 3);

    assert_eq!(regions[0]["region"], "apac");
    assert_eq!(regions[0]["avg_latency"].as_f64(), Some(178.04));
    assert_eq!(regions[0]["p95_latency"].as_f64(), Some(209.59));
    assert_eq!(regions[0]["avg_uptime"].as_f64(), Some(98.29));
    assert_eq!(regions[0]["breaches"], json!(3));

    assert_eq!(regions[1]["region"], "emea");
    assert_eq!(regions[1]["avg_latency"].as_f64(), Some(158.2));
    assert_eq!(regions[1]["p95_latency"].as_f64(), Some(199.13));
    assert_eq!(regions[1]["avg_uptime"].as_f64(), Some(98.35));
    assert_eq!(regions[1]["breaches"], json!(1));

    assert_eq!(regions[2]["region"], "amer");
    assert_eq!(regions[2]["avg_latency"].as_f64(), Some(186.56));
    assert_eq!(regions[2]["p95_latency"].as_f64(), Some(224.93));
    assert_eq!(regions[2]["avg_uptime"].as_f64(), Some(98.24));
    assert_eq!(regions[2]["breaches"], json!(4));
}

#[tokio::test]
async fn unknown_region_is_zero_filled_not_an_error() {
    let app = spawn_app();

    let req = analyze_request(&json!({ "regions": ["mars"], "threshold_ms": 150.0 }));
    let res = expect_status(send(&app, req).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    let mars = &body["regions"][0];
    assert_eq!(mars["region"], "mars");
    assert_eq!(mars["avg_latency"].as_f64(), Some(0.0));
    assert_eq!(mars["p95_latency"].as_f64(), Some(0.0));
    assert_eq!(mars["avg_uptime"].as_f64(), Some(0.0));
    assert_eq!(mars["breaches"], json!(0));
    assert_eq!(body["total_regions"], json!(1));
}

#[tokio::test]
async fn duplicate_regions_are_summarized_independently() {
    let app = spawn_app();

    let req = analyze_request(&json!({ "regions": ["amer", "amer"], "threshold_ms": 200.0 }));
    let res = expect_status(send(&app, req).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(body["total_regions"], json!(2));
    let regions = body["regions"].as_array().unwrap();
    assert_eq!(regions[0], regions[1]);
    assert_eq!(regions[0]["breaches"], json!(4));
}

#[tokio::test]
async fn threshold_is_echoed_unmodified() {
    let app = spawn_app();

    let req = analyze_request(&json!({ "regions": [], "threshold_ms": -42.5 }));
    let res = expect_status(send(&app, req).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(body["threshold_ms"].as_f64(), Some(-42.5));
    assert_eq!(body["total_regions"], json!(0));
    assert!(body["regions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_body_is_rejected_as_client_error() {
    let app = spawn_app();

    // Missing threshold_ms
    let req = analyze_request(&json!({ "regions": ["apac"] }));
    let res = send(&app, req).await;
    assert!(res.status().is_client_error(), "got {}", res.status());

    // Not JSON at all
    let req = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let res = send(&app, req).await;
    assert!(res.status().is_client_error(), "got {}", res.status());
}
