//! Feature-to-coordinate mapping.

use crate::core::{Coordinate, FeatureSet};

/// Map extracted features onto a phase-space coordinate.
///
/// Total over all feature sets; there are no error cases. Magnitude and
/// rate are clamped to 1.0 so the scoring logarithms stay in-domain even
/// for empty function bodies.
pub fn map_coordinate(features: &FeatureSet) -> Coordinate {
    Coordinate {
        rank: classify_rank(features),
        magnitude: f64::from(features.operation_count).max(1.0),
        rate: f64::from(features.max_loop_depth).max(1.0),
    }
}

/// Strict rank priority: self-recursion dominates any loop nesting, which
/// dominates straight-line code.
fn classify_rank(features: &FeatureSet) -> f64 {
    if features.has_self_recursion {
        3.0
    } else if features.max_loop_depth > 0 {
        2.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(depth: u32, ops: u32, recursive: bool) -> FeatureSet {
        FeatureSet {
            max_loop_depth: depth,
            operation_count: ops,
            has_self_recursion: recursive,
            function_name: None,
        }
    }

    #[test]
    fn test_straight_line_code_is_rank_one() {
        let coord = map_coordinate(&features(0, 3, false));
        assert_eq!(coord.rank, 1.0);
    }

    #[test]
    fn test_any_loop_is_rank_two() {
        assert_eq!(map_coordinate(&features(1, 0, false)).rank, 2.0);
        assert_eq!(map_coordinate(&features(4, 0, false)).rank, 2.0);
    }

    #[test]
    fn test_recursion_dominates_loops() {
        // Rank 3 regardless of loop depth, including depth 0.
        assert_eq!(map_coordinate(&features(0, 0, true)).rank, 3.0);
        assert_eq!(map_coordinate(&features(5, 9, true)).rank, 3.0);
    }

    #[test]
    fn test_magnitude_and_rate_clamp_to_one() {
        let coord = map_coordinate(&features(0, 0, false));
        assert_eq!(coord.magnitude, 1.0);
        assert_eq!(coord.rate, 1.0);
    }

    #[test]
    fn test_counts_pass_through_above_the_clamp() {
        let coord = map_coordinate(&features(3, 17, false));
        assert_eq!(coord.magnitude, 17.0);
        assert_eq!(coord.rate, 3.0);
    }
}
