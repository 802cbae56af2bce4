use axum::response::Html;

/// The upload form, embedded at build time so the binary is self-contained.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Serves the single-page upload form.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_posts_to_analyze_endpoint() {
        assert!(INDEX_HTML.contains("/api/analyze"));
    }

    #[test]
    fn test_index_page_has_image_and_brief_fields() {
        assert!(INDEX_HTML.contains("name=\"image\"") || INDEX_HTML.contains("'image'"));
        assert!(INDEX_HTML.contains("'brief'"));
    }
}
