//! Positional splitting of the provider's free-text reply into the three
//! result fields.
//!
//! The split is deliberately naive: segments are taken in order from
//! blank-line boundaries, missing segments become empty strings, and extra
//! segments are dropped. There is no guarantee the model produces exactly
//! three paragraphs; a robust design would request a delimited or
//! schema-tagged reply, but this mirrors the prompt contract as written.

use crate::analysis::models::AnalysisResult;

/// Splits a provider reply on `"\n\n"` and maps the first three segments
/// positionally to designAnalysis / copyAnalysis / campaignOutline.
pub fn split_sections(text: &str) -> AnalysisResult {
    let mut parts = text.split("\n\n");
    AnalysisResult {
        design_analysis: parts.next().unwrap_or_default().to_string(),
        copy_analysis: parts.next().unwrap_or_default().to_string(),
        campaign_outline: parts.next().unwrap_or_default().to_string(),
    }
}
