/// Lowercase, turn anything outside `[A-Za-z0-9_]` and whitespace into a
/// space, collapse whitespace runs and trim.
pub fn normalize_text(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut to `max_length` characters, the last three replaced by `...`.
pub fn truncate_message(content: &str, max_length: usize) -> String {
    if content.chars().count() <= max_length {
        return content.to_string();
    }

    let keep = max_length.saturating_sub(3);
    let mut truncated: String = content.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Returns the user-facing reason when `content` can't be sent.
pub fn validate_message(content: &str, max_length: usize) -> Option<String> {
    let trimmed = content.trim();

    if trimmed.is_empty() {
        return Some("Message cannot be empty".to_string());
    }

    if trimmed.chars().count() > max_length {
        return Some(format!("Message too long (max {} characters)", max_length));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_collapses_spaces() {
        assert_eq!(normalize_text("  Hello,   World!! "), "hello world");
        assert_eq!(normalize_text("Security+ exam?"), "security exam");
        assert_eq!(normalize_text("snake_case stays"), "snake_case stays");
        assert_eq!(normalize_text("tabs\tand\nnewlines"), "tabs and newlines");
    }

    #[test]
    fn normalize_treats_non_ascii_as_separator() {
        assert_eq!(normalize_text("café👋hi"), "caf hi");
        assert_eq!(normalize_text("!!!"), "");
    }

    #[test]
    fn truncate_keeps_short_content() {
        assert_eq!(truncate_message("short", 10), "short");
        assert_eq!(truncate_message("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn truncate_appends_ellipsis_within_limit() {
        let long = "a".repeat(1200);
        let cut = truncate_message(&long, 1000);
        assert_eq!(cut.chars().count(), 1000);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let cut = truncate_message("ééééé", 4);
        assert_eq!(cut, "é...");
    }

    #[test]
    fn validate_rejects_blank_and_oversized() {
        assert_eq!(
            validate_message("   ", 500),
            Some("Message cannot be empty".to_string())
        );
        assert_eq!(
            validate_message(&"x".repeat(501), 500),
            Some("Message too long (max 500 characters)".to_string())
        );
        assert_eq!(validate_message(&"x".repeat(500), 500), None);
        assert_eq!(validate_message("  padded  ", 6), None);
    }
}
