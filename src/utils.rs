/// Shortens `s` to at most `max_chars` characters, appending an ellipsis when cut
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}...", &s[..idx]),
    }
}

/// Masks all but the last four characters of a secret
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }

    let visible = secret.chars().skip(count - 4).collect::<String>();
    format!("{}{visible}", "*".repeat(count - 4))
}
