//! CPF/CNPJ classification and the combined document type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cnpj::{CNPJ_LEN, Cnpj, format_cnpj, is_valid_cnpj};
use super::cpf::{CPF_LEN, Cpf, format_cpf, is_valid_cpf};
use super::digits::clean_document;
use super::error::DocumentError;

/// Which Brazilian taxpayer registry a number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// CPF, individual (pessoa física).
    Cpf,
    /// CNPJ, company (pessoa jurídica).
    Cnpj,
}

impl DocumentKind {
    /// Number of digits a document of this kind has.
    pub fn digit_count(self) -> usize {
        match self {
            Self::Cpf => CPF_LEN,
            Self::Cnpj => CNPJ_LEN,
        }
    }

    /// Short uppercase label ("CPF" / "CNPJ").
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }

    /// Kind implied by a cleaned digit count, if any.
    pub fn from_digit_count(len: usize) -> Option<Self> {
        match len {
            CPF_LEN => Some(Self::Cpf),
            CNPJ_LEN => Some(Self::Cnpj),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying free-form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentClassification {
    /// A valid CPF.
    Individual,
    /// A valid CNPJ.
    Company,
    /// Neither.
    Invalid,
}

impl DocumentClassification {
    /// `true` for [`Individual`](Self::Individual) and [`Company`](Self::Company).
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// The document kind, if the input was valid.
    pub fn kind(self) -> Option<DocumentKind> {
        match self {
            Self::Individual => Some(DocumentKind::Cpf),
            Self::Company => Some(DocumentKind::Cnpj),
            Self::Invalid => None,
        }
    }
}

/// Classify input as a valid CPF, a valid CNPJ, or neither.
///
/// ```
/// use lexsum::{classify_document, DocumentClassification};
///
/// assert_eq!(classify_document("111.444.777-35"), DocumentClassification::Individual);
/// assert_eq!(classify_document("11.222.333/0001-81"), DocumentClassification::Company);
/// assert_eq!(classify_document("123"), DocumentClassification::Invalid);
/// ```
pub fn classify_document(input: &str) -> DocumentClassification {
    if is_valid_cpf(input) {
        DocumentClassification::Individual
    } else if is_valid_cnpj(input) {
        DocumentClassification::Company
    } else {
        DocumentClassification::Invalid
    }
}

/// Check whether `input` is a valid CPF or a valid CNPJ.
pub fn is_valid_document(input: &str) -> bool {
    classify_document(input).is_valid()
}

/// Mask a CPF or CNPJ according to its cleaned length.
///
/// Returns `None` for any other length. The checksum is not verified.
pub fn format_document(input: &str) -> Option<String> {
    match DocumentKind::from_digit_count(clean_document(input).len())? {
        DocumentKind::Cpf => format_cpf(input),
        DocumentKind::Cnpj => format_cnpj(input),
    }
}

/// A validated CPF or CNPJ.
///
/// Serializes as the bare cleaned digit string; deserialization
/// re-validates and picks the kind from the length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Document {
    /// Individual taxpayer number.
    Cpf(Cpf),
    /// Company taxpayer number.
    Cnpj(Cnpj),
}

impl Document {
    /// Parse free-form input, choosing CPF or CNPJ by cleaned length.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        let len = clean_document(input).len();
        match DocumentKind::from_digit_count(len) {
            Some(DocumentKind::Cpf) => Cpf::parse(input).map(Self::Cpf),
            Some(DocumentKind::Cnpj) => Cnpj::parse(input).map(Self::Cnpj),
            None => {
                tracing::debug!(digits = len, "rejected document of unknown length");
                Err(DocumentError::Length {
                    expected: "11 or 14",
                    actual: len,
                })
            }
        }
    }

    /// Whether this is a CPF or a CNPJ.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Cpf(_) => DocumentKind::Cpf,
            Self::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// Individual for a CPF, company for a CNPJ. Never `Invalid`.
    pub fn classification(&self) -> DocumentClassification {
        match self {
            Self::Cpf(_) => DocumentClassification::Individual,
            Self::Cnpj(_) => DocumentClassification::Company,
        }
    }

    /// The cleaned digits.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// The masked form.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf(cpf) => fmt::Display::fmt(cpf, f),
            Self::Cnpj(cnpj) => fmt::Display::fmt(cnpj, f),
        }
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Document {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Document> for String {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Cpf(cpf) => cpf.into(),
            Document::Cnpj(cnpj) => cnpj.into(),
        }
    }
}

impl From<Cpf> for Document {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for Document {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}
