//! Shared utility functions.

use std::borrow::Cow;

/// Single-line preview of `text` for log messages.
///
/// Newlines become spaces and the result is cut to at most `max_bytes`
/// (on a UTF-8 boundary), with `...` appended when something was cut.
pub fn log_preview(text: &str, max_bytes: usize) -> Cow<'_, str> {
    let flat: Cow<'_, str> = if text.contains(['\n', '\r']) {
        Cow::Owned(text.replace(['\n', '\r'], " "))
    } else {
        Cow::Borrowed(text)
    };

    if flat.len() <= max_bytes {
        return flat;
    }

    let mut end = max_bytes;
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}...", &flat[..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_is_borrowed() {
        let preview = log_preview("hello", 10);
        assert!(matches!(preview, Cow::Borrowed("hello")));
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        assert_eq!(log_preview("hello world", 5), "hello...");
    }

    #[test]
    fn preview_flattens_newlines() {
        assert_eq!(log_preview("line one\nline two", 100), "line one line two");
    }

    #[test]
    fn preview_respects_multibyte_boundary() {
        // each char is 3 bytes; cutting at 4 must back up to 3
        assert_eq!(log_preview("あのね", 4), "あ...");
    }
}
