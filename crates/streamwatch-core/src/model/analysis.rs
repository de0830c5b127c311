// ── Analysis model vocabulary ──

use strum::{Display, EnumString, VariantNames};

/// The analysis models the backend currently ships.
///
/// This enum exists for caller-side validation and completion (the CLI
/// rejects a typo'd model name before it hits the network). Stores and
/// wire types deliberately carry plain strings instead: the backend
/// owns the vocabulary and may grow it, and a stream listing an unknown
/// model must render, not crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum AnalysisModel {
    AssetDetection,
    DefectAnalysis,
}

impl AnalysisModel {
    /// All known model names in wire spelling.
    pub fn known_names() -> &'static [&'static str] {
        Self::VARIANTS
    }
}
