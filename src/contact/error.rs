use thiserror::Error;

/// Why a contact or address field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContactError {
    /// Phone number does not have 10 or 11 digits (DDD included).
    #[error("phone must have 10 or 11 digits including area code, got {0}")]
    PhoneLength(usize),

    /// Name is shorter or longer than allowed after trimming.
    #[error("name must have between {min} and {max} characters, got {actual}")]
    NameLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    /// CEP does not have 8 digits.
    #[error("CEP must have 8 digits, got {0}")]
    CepLength(usize),
}
