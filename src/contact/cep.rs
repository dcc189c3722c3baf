//! CEP (Código de Endereçamento Postal), the 8-digit Brazilian postal code.

use super::error::ContactError;
use crate::core::clean_document;

const CEP_LEN: usize = 8;

/// Validate a CEP, returning its 8 cleaned digits.
pub fn validate_cep(input: &str) -> Result<String, ContactError> {
    let digits = clean_document(input);
    if digits.len() == CEP_LEN {
        Ok(digits)
    } else {
        Err(ContactError::CepLength(digits.len()))
    }
}

/// Render a CEP as `00000-000`.
pub fn format_cep(input: &str) -> Option<String> {
    let d = validate_cep(input).ok()?;
    Some(format!("{}-{}", &d[..5], &d[5..]))
}
