use crate::server::error::AppError;

/// Normalizes a Brazilian postal code to its 8-digit form.
///
/// Accepts `99999-999` or `99999999`, surrounding whitespace ignored.
///
/// # Arguments
/// - `value` - The postal code as submitted
///
/// # Returns
/// - `Ok(String)` - The 8 digits with the hyphen removed
/// - `Err(AppError::BadRequest)` - Any other shape
pub fn normalize_postal_code(value: &str) -> Result<String, AppError> {
    let value = value.trim();
    let digits = match value.split_once('-') {
        Some((prefix, suffix)) if prefix.len() == 5 && suffix.len() == 3 => {
            format!("{}{}", prefix, suffix)
        }
        Some(_) => String::new(),
        None => value.to_string(),
    };

    if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!(
            "invalid postal code '{}', expected 99999-999 or 99999999",
            value
        )));
    }

    Ok(digits)
}

/// Clamps `page`/`entries` query parameters to a usable page request.
///
/// Pages are zero-based. `entries` defaults to 10 and is capped at 100.
pub fn page_request(page: Option<u64>, entries: Option<u64>) -> (u64, u64) {
    let per_page = entries.unwrap_or(10).clamp(1, 100);
    (page.unwrap_or(0), per_page)
}
