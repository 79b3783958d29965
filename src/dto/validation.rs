//! Validation helpers for DTOs and documents.

use validator::ValidationError;

/// Validates a CSS-style hex color: `#` followed by 3 or 6 hex digits.
///
/// # Examples
///
/// ```ignore
/// validate_hex_color("#09f")     // Ok
/// validate_hex_color("#0099ff")  // Ok
/// validate_hex_color("0099ff")   // Err - missing `#`
/// validate_hex_color("#09fz")    // Err - not hex
/// ```
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let Some(digits) = value.strip_prefix('#') else {
        let mut err = ValidationError::new("hex_color_prefix");
        err.message = Some(format!("color `{value}` must start with `#`").into());
        return Err(err);
    };

    if digits.len() != 3 && digits.len() != 6 {
        let mut err = ValidationError::new("hex_color_length");
        err.message =
            Some(format!("color `{value}` must have 3 or 6 hex digits after `#`").into());
        return Err(err);
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        let mut err = ValidationError::new("hex_color_format");
        err.message = Some(format!("color `{value}` contains non-hex characters").into());
        return Err(err);
    }

    Ok(())
}
