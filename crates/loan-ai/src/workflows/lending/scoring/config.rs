use serde::{Deserialize, Serialize};

/// Thresholds behind the eligibility heuristic. The additive weights live in
/// the rules module next to the checks that apply them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_probability: f64,
    pub approval_threshold: f64,
    /// Scores strictly above this get the top credit bonus.
    pub excellent_credit_floor: u16,
    /// Scores strictly above this (up to and including the excellent floor)
    /// get the smaller bonus. A score of exactly 650 gets nothing.
    pub good_credit_floor: u16,
    /// Scores strictly below this are penalized; 600-650 is deliberately flat.
    pub poor_credit_ceiling: u16,
    pub comfortable_income_ratio: f64,
    pub strained_income_ratio: f64,
    pub seasoned_employment_years: u8,
    pub minimum_employment_years: u8,
    pub max_existing_loans: u8,
    /// Education loans favor applicants strictly younger than this.
    pub young_applicant_age: u8,
    /// Mortgage applicants with more tenure than this earn back part of the
    /// product penalty.
    pub mortgage_tenure_years: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_probability: 0.5,
            approval_threshold: 0.6,
            excellent_credit_floor: 750,
            good_credit_floor: 650,
            poor_credit_ceiling: 600,
            comfortable_income_ratio: 0.3,
            strained_income_ratio: 0.15,
            seasoned_employment_years: 5,
            minimum_employment_years: 1,
            max_existing_loans: 2,
            young_applicant_age: 30,
            mortgage_tenure_years: 3,
        }
    }
}
