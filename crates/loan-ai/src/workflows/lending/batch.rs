use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::{LoanApplication, Prediction};
use super::intake;
use super::scoring::ScoringEngine;

/// Failure to consume an applications export. A row that does not parse
/// aborts the run; rows that merely fail intake validation are skipped and
/// reported instead.
#[derive(Debug, thiserror::Error)]
pub enum BatchScoringError {
    #[error("failed to read applications file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applications CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One scored row, keyed by its CSV line number.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    pub line: u64,
    pub application: LoanApplication,
    pub prediction: Prediction,
}

/// One rejected row.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSkip {
    pub line: u64,
    pub reason: String,
}

/// Outcome of scoring a whole export.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub scored: Vec<BatchRow>,
    pub skipped: Vec<BatchSkip>,
}

impl BatchReport {
    pub fn approved(&self) -> usize {
        self.scored
            .iter()
            .filter(|row| row.prediction.approved)
            .count()
    }

    pub fn declined(&self) -> usize {
        self.scored.len() - self.approved()
    }
}

/// Score every application row in a headered CSV export. Column names match
/// the `LoanApplication` field names.
pub fn score_reader<R: Read>(
    reader: R,
    engine: &ScoringEngine,
) -> Result<BatchReport, BatchScoringError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scored = Vec::new();
    let mut skipped = Vec::new();

    for (index, row) in csv_reader.deserialize::<LoanApplication>().enumerate() {
        // Line 1 is the header.
        let line = index as u64 + 2;
        let application = row?;

        if let Err(reason) = intake::validate(&application) {
            skipped.push(BatchSkip {
                line,
                reason: reason.to_string(),
            });
            continue;
        }

        let prediction = engine.predict(&application).prediction;
        scored.push(BatchRow {
            line,
            application,
            prediction,
        });
    }

    Ok(BatchReport { scored, skipped })
}

pub fn score_path<P: AsRef<Path>>(
    path: P,
    engine: &ScoringEngine,
) -> Result<BatchReport, BatchScoringError> {
    let file = File::open(path)?;
    score_reader(file, engine)
}
