use super::domain::LoanApplication;

/// Validation errors raised before an application reaches the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("income must be a positive amount")]
    NonPositiveIncome,
    #[error("loan amount must be a positive amount")]
    NonPositiveLoanAmount,
}

/// Both currency amounts must be positive; every other field is taken as
/// given and flows straight to the scorer.
pub fn validate(application: &LoanApplication) -> Result<(), IntakeError> {
    if !(application.income > 0.0) {
        return Err(IntakeError::NonPositiveIncome);
    }

    if !(application.loan_amount > 0.0) {
        return Err(IntakeError::NonPositiveLoanAmount);
    }

    Ok(())
}
