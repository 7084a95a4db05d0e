use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use super::banks::recommended_offers;
use super::domain::{LoanApplication, PredictionId};
use super::intake::{self, IntakeError};
use super::repository::{PredictionRecord, PredictionRepository, RepositoryError};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::tips::financial_tips;

/// Service composing intake validation, the scoring engine, the bank
/// matcher, and the tips generator over a repository.
pub struct LoanPredictionService<R> {
    repository: Arc<R>,
    engine: ScoringEngine,
    processing_delay: Duration,
}

static PREDICTION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_prediction_id() -> PredictionId {
    let id = PREDICTION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PredictionId(format!("loan-{id:06}"))
}

impl<R> LoanPredictionService<R>
where
    R: PredictionRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig, processing_delay: Duration) -> Self {
        Self {
            repository,
            engine: ScoringEngine::new(config),
            processing_delay,
        }
    }

    /// Pause advertised to HTTP handlers so clients perceive "processing".
    /// The scoring itself is synchronous and instant.
    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Validate, score, and store a submission, returning the full record.
    /// Bank offers are attached only for approvals; declined applicants get
    /// tips but no recommendations.
    pub fn submit(
        &self,
        application: LoanApplication,
    ) -> Result<PredictionRecord, LoanServiceError> {
        intake::validate(&application)?;

        let outcome = self.engine.predict(&application);
        let offers = if outcome.prediction.approved {
            recommended_offers(&outcome.prediction, &application)
        } else {
            Vec::new()
        };
        let tips = financial_tips(&application);

        let record = PredictionRecord {
            prediction_id: next_prediction_id(),
            submitted_at: Utc::now(),
            application,
            outcome,
            offers,
            tips,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Fetch a previously submitted record for status responses.
    pub fn fetch(&self, id: &PredictionId) -> Result<PredictionRecord, LoanServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the prediction service.
#[derive(Debug, thiserror::Error)]
pub enum LoanServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
