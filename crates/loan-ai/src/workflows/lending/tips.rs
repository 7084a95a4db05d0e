use serde::Serialize;

use super::domain::LoanApplication;

const WEAK_CREDIT_FLOOR: u16 = 650;
const MAX_COMFORTABLE_LOANS: u8 = 2;
const STRAINED_INCOME_RATIO: f64 = 0.15;
const STABLE_EMPLOYMENT_YEARS: u8 = 2;

/// One piece of advice shown under the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinancialTip {
    pub title: &'static str,
    pub description: &'static str,
}

/// Emit a tip per violated threshold, in fixed check order. Profiles that
/// trip nothing get the two generic fallbacks instead.
pub fn financial_tips(application: &LoanApplication) -> Vec<FinancialTip> {
    let mut tips = Vec::new();

    if application.credit_score < WEAK_CREDIT_FLOOR {
        tips.push(FinancialTip {
            title: "Improve Your Credit Score",
            description: "Pay your bills on time, reduce outstanding debt, and check your credit report for errors.",
        });
    }

    if application.existing_loans > MAX_COMFORTABLE_LOANS {
        tips.push(FinancialTip {
            title: "Reduce Existing Debt",
            description: "Work on paying off some of your existing loans before applying for a new one.",
        });
    }

    if application.income_to_loan_ratio() < STRAINED_INCOME_RATIO {
        tips.push(FinancialTip {
            title: "Increase Income to Loan Ratio",
            description: "Consider either a smaller loan amount or ways to increase your income before applying.",
        });
    }

    if application.employment_years < STABLE_EMPLOYMENT_YEARS {
        tips.push(FinancialTip {
            title: "Stable Employment History",
            description: "Lenders prefer applicants with a stable job history of at least 2 years.",
        });
    }

    if tips.is_empty() {
        tips.push(FinancialTip {
            title: "Build an Emergency Fund",
            description: "Having 3-6 months of expenses saved shows financial responsibility to lenders.",
        });
        tips.push(FinancialTip {
            title: "Get a Co-Signer",
            description: "If eligible, having a co-signer with strong credit can improve your loan approval chances.",
        });
    }

    tips
}
