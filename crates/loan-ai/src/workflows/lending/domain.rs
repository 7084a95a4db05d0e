use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted predictions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredictionId(pub String);

/// Applicant-provided snapshot captured by the intake form. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub income: f64,
    pub loan_amount: f64,
    pub loan_term: u8,
    pub credit_score: u16,
    pub employment_years: u8,
    pub age: u8,
    pub education: Education,
    pub marital_status: MaritalStatus,
    pub dependents: u8,
    pub existing_loans: u8,
    pub loan_type: LoanType,
}

impl LoanApplication {
    /// Annual income expressed as a fraction of the requested principal.
    pub fn income_to_loan_ratio(&self) -> f64 {
        self.income / self.loan_amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    Graduate,
    Undergraduate,
    HighSchool,
}

impl Education {
    pub const fn label(self) -> &'static str {
        match self {
            Education::Graduate => "graduate",
            Education::Undergraduate => "undergraduate",
            Education::HighSchool => "high_school",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
}

impl MaritalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::Divorced => "divorced",
        }
    }
}

/// Product category, used both as a scoring adjustment and as the
/// bank-matching partition key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    Home,
    Car,
    Education,
    Gold,
    Mortgage,
}

impl LoanType {
    pub const fn label(self) -> &'static str {
        match self {
            LoanType::Home => "home",
            LoanType::Car => "car",
            LoanType::Education => "education",
            LoanType::Gold => "gold",
            LoanType::Mortgage => "mortgage",
        }
    }

    pub const ALL: [LoanType; 5] = [
        LoanType::Home,
        LoanType::Car,
        LoanType::Education,
        LoanType::Gold,
        LoanType::Mortgage,
    ];
}

/// Headline output of the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub approved: bool,
    pub probability: f64,
    pub risk_score: u8,
}

impl Prediction {
    /// Probability rendered the way the results view shows it.
    pub fn probability_pct(&self) -> u8 {
        (self.probability * 100.0).round() as u8
    }

    pub fn risk_tier(&self) -> RiskTier {
        RiskTier::from_score(self.risk_score)
    }
}

/// Display band over the risk score. Never feeds back into scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn from_score(risk_score: u8) -> Self {
        if risk_score < 30 {
            RiskTier::Low
        } else if risk_score < 70 {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }
}
