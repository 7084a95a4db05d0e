//! Loan application intake, eligibility scoring, and recommendation rules.
//!
//! The "AI prediction" here is a deterministic arithmetic heuristic; there is
//! no model behind it. The scorer, bank matcher, and tips generator are pure
//! functions over the submitted application snapshot, composed by the
//! service and exposed through the HTTP router.

pub mod banks;
pub mod batch;
pub mod domain;
pub mod intake;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod tips;

#[cfg(test)]
mod tests;

pub use banks::{recommended_offers, BankOffer};
pub use batch::{score_path, score_reader, BatchReport, BatchRow, BatchScoringError, BatchSkip};
pub use domain::{
    Education, LoanApplication, LoanType, MaritalStatus, Prediction, PredictionId, RiskTier,
};
pub use intake::IntakeError;
pub use repository::{
    PredictionRecord, PredictionRepository, PredictionView, RepositoryError,
};
pub use router::lending_router;
pub use scoring::{
    PredictionOutcome, ScoreComponent, ScoringConfig, ScoringEngine, ScoringFactor,
};
pub use service::{LoanPredictionService, LoanServiceError};
pub use tips::{financial_tips, FinancialTip};
