use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::lending::domain::{
    Education, LoanApplication, LoanType, MaritalStatus, PredictionId,
};
use crate::workflows::lending::repository::{
    PredictionRecord, PredictionRepository, RepositoryError,
};
use crate::workflows::lending::scoring::{ScoringConfig, ScoringEngine};
use crate::workflows::lending::lending_router;
use crate::workflows::lending::service::LoanPredictionService;

pub(super) const EPS: f64 = 1e-9;

/// Canonical worked example: probability 0.68, risk score 32, approved.
pub(super) fn sample_application() -> LoanApplication {
    LoanApplication {
        income: 3_500_000.0,
        loan_amount: 15_000_000.0,
        loan_term: 15,
        credit_score: 700,
        employment_years: 5,
        age: 30,
        education: Education::Graduate,
        marital_status: MaritalStatus::Single,
        dependents: 0,
        existing_loans: 0,
        loan_type: LoanType::Home,
    }
}

/// A profile that trips no adjustment at all: ratio between the bounds,
/// mid-tenure employment, no product bonus (education loan at 35), flat
/// credit band.
pub(super) fn neutral_application() -> LoanApplication {
    LoanApplication {
        income: 25_000.0,
        loan_amount: 100_000.0,
        loan_term: 10,
        credit_score: 620,
        employment_years: 2,
        age: 35,
        education: Education::Undergraduate,
        marital_status: MaritalStatus::Single,
        dependents: 0,
        existing_loans: 0,
        loan_type: LoanType::Education,
    }
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn build_service() -> (
    LoanPredictionService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = LoanPredictionService::new(
        repository.clone(),
        ScoringConfig::default(),
        Duration::ZERO,
    );
    (service, repository)
}

pub(super) fn lending_router_with_service(
    service: LoanPredictionService<MemoryRepository>,
) -> axum::Router {
    lending_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<PredictionId, PredictionRecord>>>,
}

impl PredictionRepository for MemoryRepository {
    fn insert(&self, record: PredictionRecord) -> Result<PredictionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.prediction_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.prediction_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &PredictionId) -> Result<Option<PredictionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl PredictionRepository for ConflictRepository {
    fn insert(&self, _record: PredictionRecord) -> Result<PredictionRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &PredictionId) -> Result<Option<PredictionRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl PredictionRepository for UnavailableRepository {
    fn insert(&self, _record: PredictionRecord) -> Result<PredictionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &PredictionId) -> Result<Option<PredictionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

// Re-exported so routing tests can call handlers directly.
pub(super) use crate::workflows::lending::router::{prediction_handler, submit_handler};
