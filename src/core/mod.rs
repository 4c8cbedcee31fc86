pub mod ast;
pub mod errors;
pub mod metrics;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use ast::SyntaxNode;
pub use errors::ScanError;

/// Name reported for a scan that never saw a function definition.
pub const ANONYMOUS_FUNCTION: &str = "anonymous";

/// Structural features accumulated by one traversal of a syntax subtree.
///
/// Produced once per scan and immutable afterwards; nothing persists
/// between scans.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Maximum loop nesting depth observed at any point in the subtree.
    pub max_loop_depth: u32,
    /// Calls + binary operations + assignments.
    pub operation_count: u32,
    /// A call site targets the enclosing function's own name.
    pub has_self_recursion: bool,
    /// Name of the first function definition encountered, if any.
    pub function_name: Option<String>,
}

/// Phase-space coordinate summarizing a function's structural complexity.
///
/// `rank` is the discrete complexity class (1 = no loop, 2 = loop-bearing,
/// 3 = self-recursive). `magnitude` and `rate` are clamped to at least 1.0;
/// smaller values are out of domain for the scoring logarithms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub rank: f64,
    pub magnitude: f64,
    pub rate: f64,
}

/// Diagnostic copy of the raw features behind a score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanDetails {
    pub nested_loops: u32,
    pub instruction_estimate: u32,
    pub recursive: bool,
}

impl From<&FeatureSet> for ScanDetails {
    fn from(features: &FeatureSet) -> Self {
        ScanDetails {
            nested_loops: features.max_loop_depth,
            instruction_estimate: features.operation_count,
            recursive: features.has_self_recursion,
        }
    }
}

/// One scored function.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub function_name: String,
    pub coordinate: Coordinate,
    pub gci_score: f64,
    pub details: ScanDetails,
}

/// Every function scored in one file, plus aggregate figures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub results: Vec<ScoreResult>,
    pub summary: ScanSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_functions: usize,
    pub max_score: f64,
    pub average_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_mirror_features() {
        let features = FeatureSet {
            max_loop_depth: 2,
            operation_count: 7,
            has_self_recursion: true,
            function_name: Some("walk".to_string()),
        };

        let details = ScanDetails::from(&features);
        assert_eq!(details.nested_loops, 2);
        assert_eq!(details.instruction_estimate, 7);
        assert!(details.recursive);
    }

    #[test]
    fn test_score_result_serializes_round_trip() {
        let result = ScoreResult {
            function_name: "bubble_sort".to_string(),
            coordinate: Coordinate {
                rank: 2.0,
                magnitude: 5.0,
                rate: 2.0,
            },
            gci_score: 3.4414,
            details: ScanDetails {
                nested_loops: 2,
                instruction_estimate: 5,
                recursive: false,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: ScoreResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
