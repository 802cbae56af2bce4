use serde::{Deserialize, Serialize};

/// One analysis request: the uploaded campaign image plus the text brief.
/// Request-scoped; never persisted.
#[derive(Debug)]
pub struct Submission {
    pub image: Vec<u8>,
    /// Content type reported by the browser for the file part.
    /// Advisory only; defaults to image/jpeg when absent.
    pub content_type: String,
    pub brief: String,
}

/// The three-part result returned to the client.
/// Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub design_analysis: String,
    pub copy_analysis: String,
    pub campaign_outline: String,
}
