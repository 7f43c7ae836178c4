//! Text normalization and format checks for request fields.

/// Trims an optional value, keeping empty strings as `Some("")`.
pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Trims an optional value and drops it when it ends up empty.
pub fn non_blank(value: Option<String>) -> Option<String> {
    trimmed(value).filter(|v| !v.is_empty())
}

/// Checks a phone number: an optional leading `+` followed by 10 to 15 digits.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Escapes `%`, `_` and `\` so the value matches literally inside a LIKE pattern
/// using `\` as the escape character.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
