use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use super::convert::{ConversionError, CurrencyService, ExchangeRateSource, FixedRate};
use super::router::currency_router;

fn service() -> CurrencyService<FixedRate> {
    CurrencyService::new(FixedRate(83.5), Duration::ZERO)
}

#[test]
fn converts_at_the_source_rate() {
    let conversion = service().convert(5.0).expect("conversion succeeds");
    assert_eq!(conversion.amount_usd, 5.0);
    assert_eq!(conversion.rate, 83.5);
    assert!((conversion.amount_inr - 417.5).abs() < 1e-9);
}

#[test]
fn rejects_non_positive_amounts() {
    assert_eq!(
        service().convert(0.0),
        Err(ConversionError::NonPositiveAmount)
    );
    assert_eq!(
        service().convert(-12.0),
        Err(ConversionError::NonPositiveAmount)
    );
}

#[test]
fn display_lines_match_the_results_card() {
    let conversion = service().convert(5.0).expect("conversion succeeds");
    assert_eq!(conversion.rate_line(), "1 USD = 83.50 INR");
    assert_eq!(conversion.summary(), "$5.00 = ₹417.50");
}

#[test]
fn injected_sources_drive_the_rate() {
    struct StalePeg;

    impl ExchangeRateSource for StalePeg {
        fn usd_to_inr(&self) -> f64 {
            80.0
        }
    }

    let service = CurrencyService::new(StalePeg, Duration::ZERO);
    let conversion = service.convert(2.0).expect("conversion succeeds");
    assert_eq!(conversion.amount_inr, 160.0);
}

#[tokio::test]
async fn conversion_route_returns_view() {
    let router = currency_router(Arc::new(service()));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/currency/conversions")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"amount": 2.0}"#))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload.get("amount_inr").and_then(Value::as_f64), Some(167.0));
    assert_eq!(
        payload.get("rate_line").and_then(Value::as_str),
        Some("1 USD = 83.50 INR")
    );
}

#[tokio::test]
async fn conversion_route_rejects_zero_amounts() {
    let router = currency_router(Arc::new(service()));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/currency/conversions")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"amount": 0.0}"#))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
