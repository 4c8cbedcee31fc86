// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod core;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Coordinate, FeatureSet, FileReport, ScanDetails, ScanError, ScanSummary, ScoreResult,
    SyntaxNode,
};

pub use crate::analyzers::{
    scan_all_functions, scan_function, scan_node, scan_source, ScanTarget, SourceProvider,
    SourceRegistry,
};

pub use crate::complexity::{collect_functions, extract_features, map_coordinate};

pub use crate::core::metrics::{calculate_average_score, find_max_score, summarize};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::scoring::{calculate_score, score_coordinate, STANDARD_LOAD};
