use super::common::*;
use crate::workflows::lending::banks::recommended_offers;
use crate::workflows::lending::domain::LoanType;

#[test]
fn weak_credit_surcharges_every_offer_and_trims_the_common_pool() {
    let engine = scoring_engine();
    let mut application = neutral_application();
    application.credit_score = 600;
    application.loan_type = LoanType::Car;

    let prediction = engine.predict(&application).prediction;
    let offers = recommended_offers(&prediction, &application);

    // AutoDrive Credit plus a single common offer, both 1.5 over the table.
    assert_eq!(offers.len(), 2);
    assert_eq!(offers[0].name, "AutoDrive Credit");
    assert_eq!(offers[0].interest_rate, "8.90%");
    assert_eq!(offers[1].name, "First National Bank");
    assert_eq!(offers[1].interest_rate, "7.25%");
}

#[test]
fn healthy_profiles_see_base_rates_and_two_common_offers() {
    let engine = scoring_engine();
    let application = sample_application();

    let prediction = engine.predict(&application).prediction;
    assert!(application.credit_score >= 650);
    assert!(prediction.risk_score <= 50);

    let offers = recommended_offers(&prediction, &application);

    let names: Vec<_> = offers.iter().map(|offer| offer.name).collect();
    assert_eq!(
        names,
        vec![
            "Homestead Housing Finance",
            "Cornerstone Home Loans",
            "First National Bank",
            "City Credit Union",
        ]
    );
    let rates: Vec<_> = offers
        .iter()
        .map(|offer| offer.interest_rate.as_str())
        .collect();
    assert_eq!(rates, vec!["6.10%", "6.45%", "5.75%", "5.99%"]);
}

#[test]
fn high_risk_score_triggers_the_surcharge_despite_fine_credit() {
    let engine = scoring_engine();
    let mut application = neutral_application();
    application.credit_score = 700;
    application.income = 10_000.0;
    application.loan_amount = 100_000.0;
    application.employment_years = 0;
    application.existing_loans = 3;
    application.loan_type = LoanType::Gold;

    let prediction = engine.predict(&application).prediction;
    assert!(prediction.risk_score > 50);

    let offers = recommended_offers(&prediction, &application);

    assert_eq!(offers.len(), 2);
    assert_eq!(offers[0].name, "Golden Reserve Finance");
    assert_eq!(offers[0].interest_rate, "8.50%");
    assert_eq!(offers[1].interest_rate, "7.25%");
}

#[test]
fn specialized_offers_always_precede_the_common_pool() {
    let engine = scoring_engine();

    for loan_type in LoanType::ALL {
        let mut application = sample_application();
        application.loan_type = loan_type;

        let prediction = engine.predict(&application).prediction;
        let offers = recommended_offers(&prediction, &application);

        assert!(!offers.is_empty(), "{} pool missing", loan_type.label());

        let first_common = offers
            .iter()
            .position(|offer| offer.id < 100)
            .expect("common offers present");
        assert!(
            offers[..first_common].iter().all(|offer| offer.id >= 100),
            "{} offers out of order",
            loan_type.label()
        );
        assert!(
            offers[first_common..].iter().all(|offer| offer.id < 100),
            "{} offers out of order",
            loan_type.label()
        );
    }
}
