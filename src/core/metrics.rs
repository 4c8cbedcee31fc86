use crate::core::{ScanSummary, ScoreResult};

pub fn summarize(results: &[ScoreResult]) -> ScanSummary {
    ScanSummary {
        total_functions: results.len(),
        max_score: find_max_score(results),
        average_score: calculate_average_score(results),
    }
}

pub fn calculate_average_score(results: &[ScoreResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }

    let total: f64 = results.iter().map(|r| r.gci_score).sum();
    total / results.len() as f64
}

pub fn find_max_score(results: &[ScoreResult]) -> f64 {
    results
        .iter()
        .map(|r| r.gci_score)
        .fold(0.0, f64::max)
}
