use chrono::{DateTime, Utc};
use serde::Serialize;

use super::banks::BankOffer;
use super::domain::{LoanApplication, PredictionId};
use super::scoring::{PredictionOutcome, ScoreComponent};
use super::tips::FinancialTip;

/// Repository record pairing the submitted application with everything the
/// results view needs.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRecord {
    pub prediction_id: PredictionId,
    pub submitted_at: DateTime<Utc>,
    pub application: LoanApplication,
    pub outcome: PredictionOutcome,
    pub offers: Vec<BankOffer>,
    pub tips: Vec<FinancialTip>,
}

impl PredictionRecord {
    pub fn verdict(&self) -> &'static str {
        if self.outcome.prediction.approved {
            "Loan Approved!"
        } else {
            "Loan Not Recommended"
        }
    }

    pub fn verdict_detail(&self) -> &'static str {
        if self.outcome.prediction.approved {
            "Based on your profile, you have a good chance of loan approval."
        } else {
            "Based on your profile, this loan may be difficult to get approved."
        }
    }

    pub fn view(&self) -> PredictionView {
        let prediction = self.outcome.prediction;
        PredictionView {
            prediction_id: self.prediction_id.clone(),
            submitted_at: self.submitted_at,
            approved: prediction.approved,
            probability: prediction.probability,
            probability_pct: prediction.probability_pct(),
            risk_score: prediction.risk_score,
            risk_tier: prediction.risk_tier().label(),
            verdict: self.verdict(),
            verdict_detail: self.verdict_detail(),
            components: self.outcome.components.clone(),
            recommended_banks: self.offers.clone(),
            tips: self.tips.clone(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
/// Records only ever live in process memory; there is no durable backend.
pub trait PredictionRepository: Send + Sync {
    fn insert(&self, record: PredictionRecord) -> Result<PredictionRecord, RepositoryError>;
    fn fetch(&self, id: &PredictionId) -> Result<Option<PredictionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Applicant-facing rendering of a stored record.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionView {
    pub prediction_id: PredictionId,
    pub submitted_at: DateTime<Utc>,
    pub approved: bool,
    pub probability: f64,
    pub probability_pct: u8,
    pub risk_score: u8,
    pub risk_tier: &'static str,
    pub verdict: &'static str,
    pub verdict_detail: &'static str,
    pub components: Vec<ScoreComponent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommended_banks: Vec<BankOffer>,
    pub tips: Vec<FinancialTip>,
}
