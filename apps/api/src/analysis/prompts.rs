// All provider prompt constants for the analysis module.

/// Analysis prompt template. Replace `{brief}` before sending.
/// Asks for three labeled sections separated by blank lines; the handler
/// splits the reply positionally on those boundaries.
pub const ANALYZE_PROMPT_TEMPLATE: &str = "Analyze this email campaign image and provide: \
    1) Design Analysis, 2) Copy Analysis, and 3) Campaign Outline. \
    For the Campaign Outline, use the following structure: \
    Section Name (e.g., Hero Section), Header:, Subheader:, Copy Blurb:, CTA:. \
    The campaign brief is: {brief}";

/// Builds the full analysis prompt with the brief interpolated verbatim.
pub fn build_analyze_prompt(brief: &str) -> String {
    ANALYZE_PROMPT_TEMPLATE.replace("{brief}", brief)
}
