//! Brazilian phone numbers: two-digit DDD area code plus an 8-digit
//! landline or 9-digit mobile number.

use super::error::ContactError;
use crate::core::clean_document;

/// Validate a phone number, returning its cleaned digits.
///
/// Formatting characters are ignored. The cleaned number must have 10
/// (landline) or 11 (mobile) digits.
pub fn validate_phone(input: &str) -> Result<String, ContactError> {
    let digits = clean_document(input);
    match digits.len() {
        10 | 11 => Ok(digits),
        n => Err(ContactError::PhoneLength(n)),
    }
}

/// Render a phone number as `(DD) NNNNN-NNNN` or `(DD) NNNN-NNNN`.
///
/// Returns `None` when the input does not clean to 10 or 11 digits.
pub fn format_phone(input: &str) -> Option<String> {
    let d = validate_phone(input).ok()?;
    let split = d.len() - 4;
    Some(format!("({}) {}-{}", &d[..2], &d[2..split], &d[split..]))
}
