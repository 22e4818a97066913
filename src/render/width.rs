//! Terminal display width helpers.

/// Display width of a cell or label, ignoring any ANSI styling it carries.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    unicode_width::UnicodeWidthStr::width(String::from_utf8_lossy(&clean).as_ref())
}

/// Pad `text` with trailing spaces up to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = display_width(text);
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(current));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(current)));
    padded
}
