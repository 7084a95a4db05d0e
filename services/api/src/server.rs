use crate::cli::ServeArgs;
use crate::infra::{default_scoring_config, AppState, InMemoryPredictionRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_ai::config::AppConfig;
use loan_ai::error::AppError;
use loan_ai::telemetry;
use loan_ai::workflows::currency::{CurrencyService, FixedRate};
use loan_ai::workflows::lending::LoanPredictionService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryPredictionRepository::default());
    let loans = Arc::new(LoanPredictionService::new(
        repository,
        default_scoring_config(),
        config.latency.prediction_delay,
    ));
    let currency = Arc::new(CurrencyService::new(
        FixedRate(config.exchange.usd_inr_rate),
        config.latency.conversion_delay,
    ));

    let app = with_service_routes(loans, currency)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
