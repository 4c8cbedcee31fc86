pub mod analyze;

pub use analyze::{analyze_path, handle_analyze, AnalyzeConfig};
