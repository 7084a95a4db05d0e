use super::common::*;
use crate::workflows::lending::batch::{score_reader, BatchScoringError};
use std::io::Cursor;

const HEADER: &str = "income,loan_amount,loan_term,credit_score,employment_years,age,education,marital_status,dependents,existing_loans,loan_type";

#[test]
fn scores_every_valid_row_and_reports_the_rest() {
    let csv = format!(
        "{HEADER}\n\
         3500000,15000000,15,700,5,30,graduate,single,0,0,home\n\
         10000,100000,10,500,0,35,high_school,single,2,3,home\n\
         0,100000,10,700,5,35,graduate,single,0,0,car\n"
    );

    let engine = scoring_engine();
    let report = score_reader(Cursor::new(csv), &engine).expect("batch scores");

    assert_eq!(report.scored.len(), 2);
    assert_eq!(report.approved(), 1);
    assert_eq!(report.declined(), 1);

    assert_eq!(report.scored[0].line, 2);
    assert!(report.scored[0].prediction.approved);
    assert_eq!(report.scored[0].prediction.risk_score, 32);
    assert!(!report.scored[1].prediction.approved);

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 4);
    assert!(report.skipped[0].reason.contains("income"));
}

#[test]
fn unknown_loan_types_abort_the_run() {
    let csv = format!("{HEADER}\n50000,200000,15,700,5,30,graduate,single,0,0,yacht\n");

    let engine = scoring_engine();
    match score_reader(Cursor::new(csv), &engine) {
        Err(BatchScoringError::Csv(_)) => {}
        other => panic!("expected csv error, got {other:?}"),
    }
}

#[test]
fn empty_exports_produce_an_empty_report() {
    let engine = scoring_engine();
    let report =
        score_reader(Cursor::new(format!("{HEADER}\n")), &engine).expect("batch scores");

    assert!(report.scored.is_empty());
    assert!(report.skipped.is_empty());
    assert_eq!(report.approved(), 0);
}
