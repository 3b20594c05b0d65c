/// Characters of a long text kept on a card.
pub const PREVIEW_CHARS: usize = 150;

/// Appended when a preview was cut.
pub const TRUNCATION_MARKER: &str = "...";

/// First `PREVIEW_CHARS` characters of `text` plus the marker, or `text`
/// unchanged when it already fits. Counts characters, not bytes.
pub fn truncate_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}
