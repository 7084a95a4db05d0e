use crate::infra::{
    default_scoring_config, parse_education, parse_loan_type, parse_marital_status,
    InMemoryPredictionRepository,
};
use clap::Args;
use loan_ai::config::AppConfig;
use loan_ai::error::AppError;
use loan_ai::workflows::currency::{format_inr, CurrencyService, FixedRate};
use loan_ai::workflows::lending::{
    score_path, BankOffer, Education, LoanApplication, LoanPredictionService, LoanType,
    MaritalStatus, PredictionRecord, ScoringEngine,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Annual income in rupees
    #[arg(long, default_value_t = 50_000.0)]
    pub(crate) income: f64,
    /// Requested principal in rupees
    #[arg(long, default_value_t = 200_000.0)]
    pub(crate) loan_amount: f64,
    /// Loan term in years
    #[arg(long, default_value_t = 15)]
    pub(crate) loan_term: u8,
    /// Credit score (300-850)
    #[arg(long, default_value_t = 700)]
    pub(crate) credit_score: u16,
    /// Years with the current employer
    #[arg(long, default_value_t = 5)]
    pub(crate) employment_years: u8,
    /// Applicant age
    #[arg(long, default_value_t = 30)]
    pub(crate) age: u8,
    /// graduate, undergraduate, or high_school
    #[arg(long, default_value = "graduate", value_parser = parse_education)]
    pub(crate) education: Education,
    /// single, married, or divorced
    #[arg(long, default_value = "single", value_parser = parse_marital_status)]
    pub(crate) marital_status: MaritalStatus,
    /// Number of dependents
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents: u8,
    /// Number of existing loans
    #[arg(long, default_value_t = 0)]
    pub(crate) existing_loans: u8,
    /// home, car, education, gold, or mortgage
    #[arg(long, default_value = "home", value_parser = parse_loan_type)]
    pub(crate) loan_type: LoanType,
}

#[derive(Args, Debug)]
pub(crate) struct ConvertArgs {
    /// USD amount to convert
    #[arg(long, default_value_t = 1.0)]
    pub(crate) amount: f64,
    /// Override the configured USD -> INR rate
    #[arg(long)]
    pub(crate) rate: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export of applications, one headered row per applicant
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs {
        income,
        loan_amount,
        loan_term,
        credit_score,
        employment_years,
        age,
        education,
        marital_status,
        dependents,
        existing_loans,
        loan_type,
    } = args;

    let application = LoanApplication {
        income,
        loan_amount,
        loan_term,
        credit_score,
        employment_years,
        age,
        education,
        marital_status,
        dependents,
        existing_loans,
        loan_type,
    };

    let repository = Arc::new(InMemoryPredictionRepository::default());
    let service = LoanPredictionService::new(
        repository,
        default_scoring_config(),
        Duration::ZERO,
    );

    let record = match service.submit(application) {
        Ok(record) => record,
        Err(err) => {
            println!("Submission rejected: {err}");
            return Ok(());
        }
    };

    render_prediction(&record);
    Ok(())
}

pub(crate) fn run_convert(args: ConvertArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let rate = args.rate.unwrap_or(config.exchange.usd_inr_rate);
    let service = CurrencyService::new(FixedRate(rate), Duration::ZERO);

    match service.convert(args.amount) {
        Ok(conversion) => {
            println!("Currency converter");
            println!("Current Exchange Rate: {}", conversion.rate_line());
            println!("{}", conversion.summary());
        }
        Err(err) => println!("Conversion rejected: {err}"),
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let engine = ScoringEngine::new(default_scoring_config());
    let report = score_path(&args.csv, &engine)?;

    println!("Batch scoring: {}", args.csv.display());
    println!(
        "{} scored ({} approved, {} declined), {} skipped",
        report.scored.len(),
        report.approved(),
        report.declined(),
        report.skipped.len()
    );

    for row in &report.scored {
        let prediction = row.prediction;
        println!(
            "- line {} | {} for {} | {}% approval, risk {}/100 | {}",
            row.line,
            row.application.loan_type.label(),
            format_inr(row.application.loan_amount),
            prediction.probability_pct(),
            prediction.risk_score,
            if prediction.approved { "approved" } else { "declined" }
        );
    }

    for skip in &report.skipped {
        println!("- line {} skipped: {}", skip.line, skip.reason);
    }

    Ok(())
}

fn render_prediction(record: &PredictionRecord) {
    let prediction = record.outcome.prediction;
    let application = &record.application;

    println!("Loan eligibility demo");
    println!(
        "Applicant: income {} | {} loan of {} over {} years | credit {}",
        format_inr(application.income),
        application.loan_type.label(),
        format_inr(application.loan_amount),
        application.loan_term,
        application.credit_score
    );
    println!(
        "Profile: {} | {} | {} dependents | {} existing loans | {} years employed",
        application.education.label(),
        application.marital_status.label(),
        application.dependents,
        application.existing_loans,
        application.employment_years
    );

    println!("\n{}", record.verdict());
    println!("{}", record.verdict_detail());
    println!(
        "Approval probability {}% | Risk score {}/100 ({} risk)",
        prediction.probability_pct(),
        prediction.risk_score,
        prediction.risk_tier().label()
    );

    println!("\nScore breakdown");
    for component in &record.outcome.components {
        println!(
            "- {:+.2} {:?}: {}",
            component.delta, component.factor, component.notes
        );
    }

    if record.offers.is_empty() {
        println!("\nRecommended banks: none at this risk level");
    } else {
        println!("\nRecommended banks");
        for offer in &record.offers {
            println!(
                "- {} {} ({:.1}) | rate {} | max {}",
                offer.name,
                star_rating(offer),
                offer.score,
                offer.interest_rate,
                offer.max_loan_amount
            );
        }
    }

    println!("\nFinancial improvement tips");
    for tip in &record.tips {
        println!("- {}: {}", tip.title, tip.description);
    }
}

/// Five-slot star strip matching the results card: full star per whole
/// point, a half marker when the fraction reaches 0.5.
fn star_rating(offer: &BankOffer) -> String {
    let mut stars = String::new();
    for slot in 1..=5u8 {
        let slot = f32::from(slot);
        if slot <= offer.score.floor() {
            stars.push('★');
        } else if slot - 0.5 <= offer.score {
            stars.push('½');
        } else {
            stars.push('☆');
        }
    }
    stars
}
