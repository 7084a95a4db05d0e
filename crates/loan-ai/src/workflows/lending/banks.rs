use serde::Serialize;

use super::domain::{LoanApplication, LoanType, Prediction};

/// Credit scores under this mark an applicant as risky for offer selection.
const RISKY_CREDIT_FLOOR: u16 = 650;
/// Risk scores above this do the same.
const RISKY_SCORE_CEILING: u8 = 50;
/// Flat surcharge applied to every displayed rate for risky applicants.
const RISK_SURCHARGE: f64 = 1.5;

/// Offer as rendered to the applicant. Rates are formatted strings because
/// the surcharge is a display adjustment, not a repricing of the base table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankOffer {
    pub id: u16,
    pub name: &'static str,
    pub logo_ref: &'static str,
    pub interest_rate: String,
    pub max_loan_amount: &'static str,
    pub score: f32,
}

/// Static reference row backing an offer.
struct BankListing {
    id: u16,
    name: &'static str,
    logo_ref: &'static str,
    base_rate: f64,
    max_loan_amount: &'static str,
    score: f32,
}

impl BankListing {
    fn offer(&self, surcharge: f64) -> BankOffer {
        BankOffer {
            id: self.id,
            name: self.name,
            logo_ref: self.logo_ref,
            interest_rate: format!("{:.2}%", self.base_rate + surcharge),
            max_loan_amount: self.max_loan_amount,
            score: self.score,
        }
    }
}

/// Offers recommended regardless of loan type, in fixed display order.
const COMMON_POOL: [BankListing; 3] = [
    BankListing {
        id: 1,
        name: "First National Bank",
        logo_ref: "https://placehold.co/200x100/0D9488/FFFFFF?text=FNB",
        base_rate: 5.75,
        max_loan_amount: "₹25,00,000",
        score: 4.5,
    },
    BankListing {
        id: 2,
        name: "City Credit Union",
        logo_ref: "https://placehold.co/200x100/1E3A8A/FFFFFF?text=CCU",
        base_rate: 5.99,
        max_loan_amount: "₹20,00,000",
        score: 4.3,
    },
    BankListing {
        id: 3,
        name: "Premier Lending",
        logo_ref: "https://placehold.co/200x100/2563EB/FFFFFF?text=PL",
        base_rate: 6.25,
        max_loan_amount: "₹35,00,000",
        score: 4.1,
    },
];

const HOME_POOL: [BankListing; 2] = [
    BankListing {
        id: 101,
        name: "Homestead Housing Finance",
        logo_ref: "https://placehold.co/200x100/0F766E/FFFFFF?text=HHF",
        base_rate: 6.10,
        max_loan_amount: "₹50,00,000",
        score: 4.4,
    },
    BankListing {
        id: 102,
        name: "Cornerstone Home Loans",
        logo_ref: "https://placehold.co/200x100/B45309/FFFFFF?text=CHL",
        base_rate: 6.45,
        max_loan_amount: "₹40,00,000",
        score: 4.0,
    },
];

const CAR_POOL: [BankListing; 1] = [BankListing {
    id: 111,
    name: "AutoDrive Credit",
    logo_ref: "https://placehold.co/200x100/7C3AED/FFFFFF?text=ADC",
    base_rate: 7.40,
    max_loan_amount: "₹15,00,000",
    score: 4.2,
}];

const EDUCATION_POOL: [BankListing; 1] = [BankListing {
    id: 121,
    name: "Scholar First Bank",
    logo_ref: "https://placehold.co/200x100/0369A1/FFFFFF?text=SFB",
    base_rate: 5.40,
    max_loan_amount: "₹10,00,000",
    score: 4.6,
}];

const GOLD_POOL: [BankListing; 1] = [BankListing {
    id: 131,
    name: "Golden Reserve Finance",
    logo_ref: "https://placehold.co/200x100/CA8A04/FFFFFF?text=GRF",
    base_rate: 7.00,
    max_loan_amount: "₹8,00,000",
    score: 4.2,
}];

const MORTGAGE_POOL: [BankListing; 2] = [
    BankListing {
        id: 141,
        name: "Landmark Mortgage Corp",
        logo_ref: "https://placehold.co/200x100/334155/FFFFFF?text=LMC",
        base_rate: 6.80,
        max_loan_amount: "₹60,00,000",
        score: 3.9,
    },
    BankListing {
        id: 142,
        name: "Keystone Mortgage Bank",
        logo_ref: "https://placehold.co/200x100/166534/FFFFFF?text=KMB",
        base_rate: 6.95,
        max_loan_amount: "₹45,00,000",
        score: 4.1,
    },
];

fn specialized_pool(loan_type: LoanType) -> &'static [BankListing] {
    match loan_type {
        LoanType::Home => &HOME_POOL,
        LoanType::Car => &CAR_POOL,
        LoanType::Education => &EDUCATION_POOL,
        LoanType::Gold => &GOLD_POOL,
        LoanType::Mortgage => &MORTGAGE_POOL,
    }
}

/// Select offers for a scored application: the loan-type pool first, then a
/// slice of the common pool. Risky applicants see fewer common offers and a
/// surcharged rate on everything returned. No sorting; table order is
/// display order.
pub fn recommended_offers(prediction: &Prediction, application: &LoanApplication) -> Vec<BankOffer> {
    let risky = application.credit_score < RISKY_CREDIT_FLOOR
        || prediction.risk_score > RISKY_SCORE_CEILING;
    let surcharge = if risky { RISK_SURCHARGE } else { 0.0 };
    let common_take = if risky { 1 } else { 2 };

    specialized_pool(application.loan_type)
        .iter()
        .chain(COMMON_POOL.iter().take(common_take))
        .map(|listing| listing.offer(surcharge))
        .collect()
}
