use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::convert::{Conversion, CurrencyService, ExchangeRateSource};

#[derive(Debug, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct ConversionView {
    pub amount_usd: f64,
    pub rate: f64,
    pub amount_inr: f64,
    pub rate_line: String,
    pub summary: String,
}

impl From<Conversion> for ConversionView {
    fn from(conversion: Conversion) -> Self {
        Self {
            amount_usd: conversion.amount_usd,
            rate: conversion.rate,
            amount_inr: conversion.amount_inr,
            rate_line: conversion.rate_line(),
            summary: conversion.summary(),
        }
    }
}

/// Router builder for the converter tab.
pub fn currency_router<S>(service: Arc<CurrencyService<S>>) -> Router
where
    S: ExchangeRateSource + 'static,
{
    Router::new()
        .route("/api/v1/currency/conversions", post(convert_handler::<S>))
        .with_state(service)
}

pub(crate) async fn convert_handler<S>(
    State(service): State<Arc<CurrencyService<S>>>,
    axum::Json(request): axum::Json<ConversionRequest>,
) -> Response
where
    S: ExchangeRateSource + 'static,
{
    let delay = service.conversion_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match service.convert(request.amount) {
        Ok(conversion) => {
            (StatusCode::OK, axum::Json(ConversionView::from(conversion))).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
