//! Canonical domain types built from the backend's wire records.
//!
//! Conversions are tolerant by construction: missing optional fields
//! default, unknown enum spellings land in `Unknown` variants, and
//! nothing here panics on backend surprises.

mod alert;
mod analysis;
mod stream;

pub use alert::Alert;
pub use analysis::AnalysisModel;
pub use stream::{SourceType, Stream};
