//! Best-effort coercion of free-text answers into field values.
//!
//! Nothing here rejects input: malformed numbers become `NaN` and are caught
//! later by [`crate::forms::query::QueryDraft`] validation.

/// Trimmed text, kept even when empty.
pub fn text(raw: &str) -> String {
    raw.trim().to_string()
}

/// Trimmed text, or `None` when only whitespace was given.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numeric answer. Blank input counts as zero, anything unparsable is `NaN`.
pub fn number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Optional numeric answer, `None` when blank or unparsable.
pub fn optional_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// `true` for "yes" or anything starting with "y", case-insensitively.
pub fn yes_no(raw: &str) -> bool {
    let normalized = raw.trim().to_lowercase();
    normalized == "yes" || normalized.starts_with('y')
}
