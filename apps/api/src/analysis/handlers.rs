use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    Json,
};
use tracing::info;

use crate::analysis::models::{AnalysisResult, Submission};
use crate::analysis::prompts::build_analyze_prompt;
use crate::analysis::sections::split_sections;
use crate::errors::AppError;
use crate::state::AppState;

/// Fallback content type when the browser omits one on the file part.
const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// POST /api/analyze
///
/// Accepts a multipart body with an `image` file part and a `brief` text
/// field, runs one provider call, and returns the three-part result.
/// In mock mode the provider is skipped and a fixed payload is returned.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let multipart = multipart.map_err(|_| {
        AppError::Validation("Request body must be multipart/form-data".to_string())
    })?;

    let submission = extract_submission(multipart).await?;

    info!(
        "Analyzing campaign image ({} bytes, {}) with a {}-char brief",
        submission.image.len(),
        submission.content_type,
        submission.brief.len()
    );

    if state.config.mock_analysis {
        return Ok(Json(mock_result()));
    }

    let prompt = build_analyze_prompt(&submission.brief);
    let reply = state
        .llm
        .analyze_image(&prompt, &submission.image, &submission.content_type)
        .await
        .map_err(|e| AppError::Provider(format!("Campaign analysis failed: {e}")))?;

    Ok(Json(split_sections(&reply)))
}

/// Walks the multipart fields and collects exactly one image part and one
/// brief field. Repeated fields are rejected the same as missing ones: the
/// form contract is one scalar value each.
async fn extract_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut image: Option<(Vec<u8>, String)> = None;
    let mut brief: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
    {
        match field.name() {
            Some("image") => {
                if image.is_some() {
                    return Err(AppError::Validation("Invalid file upload".to_string()));
                }
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?;
                image = Some((data.to_vec(), content_type));
            }
            Some("brief") => {
                if brief.is_some() {
                    return Err(AppError::Validation("Invalid brief".to_string()));
                }
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?;
                brief = Some(text);
            }
            // Unknown fields are ignored.
            _ => {}
        }
    }

    let (image, content_type) =
        image.ok_or_else(|| AppError::Validation("Invalid file upload".to_string()))?;
    let brief = brief
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::Validation("Invalid brief".to_string()))?;

    Ok(Submission {
        image,
        content_type,
        brief,
    })
}

/// Fixed payload for mock mode. Keeps the endpoint exercisable with no
/// provider credential and no network.
pub fn mock_result() -> AnalysisResult {
    AnalysisResult {
        design_analysis: "Mock design analysis: clean hero image, strong color contrast, \
            clear visual hierarchy from header to call-to-action."
            .to_string(),
        copy_analysis: "Mock copy analysis: concise subject line, benefit-led body copy, \
            call-to-action verb could be stronger."
            .to_string(),
        campaign_outline: "Hero Section\nHeader: Your spring refresh starts here\n\
            Subheader: Save 20% this week only\n\
            Copy Blurb: Brighten your inbox and your home with our seasonal picks.\n\
            CTA: Shop the sale"
            .to_string(),
    }
}
