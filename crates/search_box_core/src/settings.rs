use std::time::Duration;

/// Offset applied to the pointer position when placing the preview, so the
/// overlay never sits under the cursor.
pub const PREVIEW_OFFSET: (i32, i32) = (10, -30);
/// How long the "copied" cursor stays up after a successful copy.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(150);
/// Literal placeholder rendered when a search has zero matches.
pub const NO_MATCHES_TEXT: &str = "No results";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererSettings {
    pub preview_offset: (i32, i32),
    pub copy_feedback: Duration,
    pub no_matches_text: String,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            preview_offset: PREVIEW_OFFSET,
            copy_feedback: COPY_FEEDBACK,
            no_matches_text: NO_MATCHES_TEXT.to_string(),
        }
    }
}
