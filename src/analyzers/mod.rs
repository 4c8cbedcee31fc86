//! Scan entry points and source retrieval capabilities.

pub mod python;

use crate::complexity::{collect_functions, extract_features, map_coordinate};
use crate::core::{ScanDetails, ScanError, ScoreResult, SyntaxNode, ANONYMOUS_FUNCTION};
use crate::scoring::score_coordinate;
use std::collections::HashMap;

/// Capability for retrieving the canonical source text of an
/// already-defined function by stable identifier.
///
/// Fails with [`ScanError::SourceUnavailable`] when no text can be
/// produced, e.g. for dynamically synthesized functions.
pub trait SourceProvider {
    fn source_for(&self, id: &str) -> Result<String, ScanError>;
}

/// What [`scan_function`] accepts: raw source text already in hand, or a
/// stable identifier resolved through a [`SourceProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanTarget {
    Source(String),
    Named(String),
}

/// In-memory provider mapping identifiers to registered source snippets.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    sources: HashMap<String, String>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(id.into(), source.into());
    }
}

impl SourceProvider for SourceRegistry {
    fn source_for(&self, id: &str) -> Result<String, ScanError> {
        self.sources.get(id).cloned().ok_or_else(|| {
            ScanError::source_unavailable(id, "no source registered under this identifier")
        })
    }
}

/// Scan one already-parsed node.
///
/// Never fails: feature extraction and coordinate mapping are total, and
/// the score engine recovers every numeric-domain failure internally.
pub fn scan_node(node: &SyntaxNode) -> ScoreResult {
    let features = extract_features(node);
    let coordinate = map_coordinate(&features);
    let gci_score = score_coordinate(&coordinate);
    let details = ScanDetails::from(&features);

    ScoreResult {
        function_name: features
            .function_name
            .unwrap_or_else(|| ANONYMOUS_FUNCTION.to_string()),
        coordinate,
        gci_score,
        details,
    }
}

/// Parse one Python source snippet and scan it as a single unit; the first
/// function definition encountered names the result.
pub fn scan_source(source: &str) -> Result<ScoreResult, ScanError> {
    let root = python::parse_module(source)?;
    Ok(scan_node(&root))
}

/// Convenience entry point over a scan target.
///
/// Returns [`ScanError::InvalidTarget`] for a blank identifier and
/// forwards [`ScanError::SourceUnavailable`] from the provider; raw-text
/// targets can only fail with [`ScanError::ParseFailure`].
pub fn scan_function(
    target: &ScanTarget,
    provider: &dyn SourceProvider,
) -> Result<ScoreResult, ScanError> {
    match target {
        ScanTarget::Source(text) => scan_source(text),
        ScanTarget::Named(id) => {
            if id.trim().is_empty() {
                return Err(ScanError::invalid_target(
                    "identifier must name a defined function",
                ));
            }
            let source = provider.source_for(id)?;
            scan_source(&source)
        }
    }
}

/// Scan every function definition in an already-parsed tree, nested ones
/// included, each as an independent unit.
pub fn scan_all_functions(root: &SyntaxNode) -> Vec<ScoreResult> {
    collect_functions(root).into_iter().map(scan_node).collect()
}
