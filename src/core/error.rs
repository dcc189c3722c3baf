use thiserror::Error;

/// Message shown to users when a CPF/CNPJ field fails validation.
pub const INVALID_DOCUMENT_MESSAGE: &str = "Documento inválido. Verifique o CPF ou CNPJ digitado.";

/// Why a CPF or CNPJ was rejected.
///
/// Only the typed parsers ([`Cpf::parse`](super::Cpf::parse),
/// [`Cnpj::parse`](super::Cnpj::parse), [`Document::parse`](super::Document::parse))
/// return this. The boolean predicates collapse every variant to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// The cleaned input has the wrong number of digits.
    #[error("expected {expected} digits, got {actual}")]
    Length {
        /// Accepted digit count(s), e.g. "11" or "11 or 14".
        expected: &'static str,
        /// Digit count after cleaning.
        actual: usize,
    },

    /// Every digit is the same (e.g. "000.000.000-00").
    #[error("all digits are identical")]
    RepeatedDigits,

    /// A check digit does not match the computed value.
    #[error("check digit at position {position} should be {expected}, found {found}")]
    CheckDigit {
        /// Zero-based index into the cleaned digits.
        position: usize,
        /// Value computed from the preceding digits.
        expected: u8,
        /// Value present in the input.
        found: u8,
    },

    /// A raw digit value outside `0..=9` was supplied.
    #[error("value at position {position} is not a decimal digit")]
    InvalidDigit {
        /// Zero-based index of the offending value.
        position: usize,
    },
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "address.cep").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule ID if applicable (e.g. "LX-01").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error tagged with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
