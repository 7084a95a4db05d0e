mod config;
mod rules;

pub use config::ScoringConfig;

use super::domain::{LoanApplication, Prediction};
use serde::{Deserialize, Serialize};

/// Stateless scorer that applies the heuristic configuration to an application.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score an application. The probability is clamped into [0, 1] after the
    /// adjustment ladder runs; approval is a strict comparison against the
    /// configured threshold.
    pub fn predict(&self, application: &LoanApplication) -> PredictionOutcome {
        let (components, raw_probability) = rules::score_application(application, &self.config);

        let probability = raw_probability.clamp(0.0, 1.0);
        let risk_score = ((1.0 - probability) * 100.0).round() as u8;

        PredictionOutcome {
            prediction: Prediction {
                approved: probability > self.config.approval_threshold,
                probability,
                risk_score,
            },
            components,
        }
    }
}

/// Discrete contribution to a prediction, allowing a transparent breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoringFactor,
    pub delta: f64,
    pub notes: String,
}

/// Factors the heuristic is allowed to weigh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFactor {
    CreditScore,
    IncomeToLoanRatio,
    EmploymentHistory,
    ExistingLoans,
    Education,
    LoanType,
}

/// Scorer output pairing the headline numbers with the adjustment trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub prediction: Prediction,
    pub components: Vec<ScoreComponent>,
}
