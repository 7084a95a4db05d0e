use loan_ai::workflows::lending::{
    Education, LoanType, MaritalStatus, PredictionId, PredictionRecord, PredictionRepository,
    RepositoryError, ScoringConfig,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPredictionRepository {
    records: Arc<Mutex<HashMap<PredictionId, PredictionRecord>>>,
}

impl PredictionRepository for InMemoryPredictionRepository {
    fn insert(&self, record: PredictionRecord) -> Result<PredictionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.prediction_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.prediction_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &PredictionId) -> Result<Option<PredictionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(crate) fn parse_education(raw: &str) -> Result<Education, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "graduate" => Ok(Education::Graduate),
        "undergraduate" => Ok(Education::Undergraduate),
        "high_school" | "high-school" => Ok(Education::HighSchool),
        other => Err(format!(
            "unknown education '{other}' (expected graduate, undergraduate, or high_school)"
        )),
    }
}

pub(crate) fn parse_marital_status(raw: &str) -> Result<MaritalStatus, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "single" => Ok(MaritalStatus::Single),
        "married" => Ok(MaritalStatus::Married),
        "divorced" => Ok(MaritalStatus::Divorced),
        other => Err(format!(
            "unknown marital status '{other}' (expected single, married, or divorced)"
        )),
    }
}

pub(crate) fn parse_loan_type(raw: &str) -> Result<LoanType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "home" => Ok(LoanType::Home),
        "car" => Ok(LoanType::Car),
        "education" => Ok(LoanType::Education),
        "gold" => Ok(LoanType::Gold),
        "mortgage" => Ok(LoanType::Mortgage),
        other => Err(format!(
            "unknown loan type '{other}' (expected home, car, education, gold, or mortgage)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_documented_loan_type() {
        for label in ["home", "car", "education", "gold", "mortgage"] {
            let loan_type = parse_loan_type(label).expect("valid loan type");
            assert_eq!(loan_type.label(), label);
        }
        assert!(parse_loan_type("boat").is_err());
    }

    #[test]
    fn education_parser_accepts_both_separators() {
        assert_eq!(
            parse_education("high-school").expect("valid"),
            Education::HighSchool
        );
        assert_eq!(
            parse_education("HIGH_SCHOOL").expect("valid"),
            Education::HighSchool
        );
    }
}
