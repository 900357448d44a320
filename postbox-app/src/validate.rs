//! Form field limits and submit-time validation.

pub(crate) const TITLE_MAX_CHARS: usize = 100;
pub(crate) const CONTENT_MAX_CHARS: usize = 500;

const TITLE_MIN_CHARS: usize = 3;
const CONTENT_MIN_CHARS: usize = 10;

/// Whether a candidate value may replace the current title field content.
/// Oversized input is rejected at the handler, never truncated afterwards.
pub(crate) fn fits_title(value: &str) -> bool {
    value.chars().count() <= TITLE_MAX_CHARS
}

pub(crate) fn fits_content(value: &str) -> bool {
    value.chars().count() <= CONTENT_MAX_CHARS
}

pub(crate) fn validate_title(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Title is required");
    }
    if value.chars().count() < TITLE_MIN_CHARS {
        return Err("Title must be at least 3 characters");
    }
    Ok(())
}

pub(crate) fn validate_content(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Content is required");
    }
    if value.chars().count() < CONTENT_MIN_CHARS {
        return Err("Content must be at least 10 characters");
    }
    Ok(())
}
