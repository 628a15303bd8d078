use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// Runs one request through the router. Non-JSON bodies come back as a string value.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).expect("request builds");

    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

pub fn onboarding_body(weight_kg: Option<f64>) -> Value {
    serde_json::json!({
        "profile": {
            "age": 34,
            "height_cm": 178,
            "weight_kg": weight_kg,
            "sex": "female",
            "activity_level": "moderate"
        },
        "preferences": {
            "appliances": ["Oven", "Air Fryer"],
            "exclusions": [],
            "kcal_target": 1800
        },
        "diet_window": { "paused": false }
    })
}
