use super::super::domain::{Education, LoanApplication, LoanType};
use super::config::ScoringConfig;
use super::{ScoreComponent, ScoringFactor};

/// Walk the adjustment ladder in its fixed order and return the applied
/// components together with the unclamped probability.
pub(crate) fn score_application(
    application: &LoanApplication,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::new();
    let mut probability = config.base_probability;

    let credit = application.credit_score;
    if credit > config.excellent_credit_floor {
        components.push(ScoreComponent {
            factor: ScoringFactor::CreditScore,
            delta: 0.30,
            notes: format!(
                "credit score {credit} above {}",
                config.excellent_credit_floor
            ),
        });
        probability += 0.30;
    } else if credit > config.good_credit_floor {
        components.push(ScoreComponent {
            factor: ScoringFactor::CreditScore,
            delta: 0.15,
            notes: format!(
                "credit score {credit} in the {}-{} band",
                config.good_credit_floor + 1,
                config.excellent_credit_floor
            ),
        });
        probability += 0.15;
    } else if credit < config.poor_credit_ceiling {
        components.push(ScoreComponent {
            factor: ScoringFactor::CreditScore,
            delta: -0.20,
            notes: format!("credit score {credit} below {}", config.poor_credit_ceiling),
        });
        probability -= 0.20;
    }

    let ratio = application.income_to_loan_ratio();
    if ratio > config.comfortable_income_ratio {
        components.push(ScoreComponent {
            factor: ScoringFactor::IncomeToLoanRatio,
            delta: 0.20,
            notes: format!("income covers {ratio:.2} of the requested principal"),
        });
        probability += 0.20;
    } else if ratio < config.strained_income_ratio {
        components.push(ScoreComponent {
            factor: ScoringFactor::IncomeToLoanRatio,
            delta: -0.20,
            notes: format!(
                "income-to-loan ratio {ratio:.2} under {:.2}",
                config.strained_income_ratio
            ),
        });
        probability -= 0.20;
    }

    let tenure = application.employment_years;
    if tenure > config.seasoned_employment_years {
        components.push(ScoreComponent {
            factor: ScoringFactor::EmploymentHistory,
            delta: 0.10,
            notes: format!("{tenure} years of employment"),
        });
        probability += 0.10;
    } else if tenure < config.minimum_employment_years {
        components.push(ScoreComponent {
            factor: ScoringFactor::EmploymentHistory,
            delta: -0.10,
            notes: "less than one year of employment".to_string(),
        });
        probability -= 0.10;
    }

    if application.existing_loans > config.max_existing_loans {
        components.push(ScoreComponent {
            factor: ScoringFactor::ExistingLoans,
            delta: -0.15,
            notes: format!("{} existing loans outstanding", application.existing_loans),
        });
        probability -= 0.15;
    }

    if application.education == Education::Graduate {
        components.push(ScoreComponent {
            factor: ScoringFactor::Education,
            delta: 0.05,
            notes: "graduate education".to_string(),
        });
        probability += 0.05;
    }

    match application.loan_type {
        LoanType::Car => {
            components.push(ScoreComponent {
                factor: ScoringFactor::LoanType,
                delta: 0.05,
                notes: "car loans clear more easily".to_string(),
            });
            probability += 0.05;
        }
        LoanType::Home => {
            components.push(ScoreComponent {
                factor: ScoringFactor::LoanType,
                delta: -0.02,
                notes: "home loans carry stricter requirements".to_string(),
            });
            probability -= 0.02;
        }
        LoanType::Education => {
            if application.age < config.young_applicant_age {
                components.push(ScoreComponent {
                    factor: ScoringFactor::LoanType,
                    delta: 0.10,
                    notes: format!(
                        "education loan applicant under {}",
                        config.young_applicant_age
                    ),
                });
                probability += 0.10;
            }
        }
        LoanType::Gold => {
            components.push(ScoreComponent {
                factor: ScoringFactor::LoanType,
                delta: 0.15,
                notes: "gold loans are secured by collateral".to_string(),
            });
            probability += 0.15;
        }
        LoanType::Mortgage => {
            components.push(ScoreComponent {
                factor: ScoringFactor::LoanType,
                delta: -0.05,
                notes: "mortgages carry stricter requirements".to_string(),
            });
            probability -= 0.05;
            if application.employment_years > config.mortgage_tenure_years {
                components.push(ScoreComponent {
                    factor: ScoringFactor::LoanType,
                    delta: 0.07,
                    notes: format!(
                        "mortgage applicant with over {} years of tenure",
                        config.mortgage_tenure_years
                    ),
                });
                probability += 0.07;
            }
        }
    }

    (components, probability)
}
