//! CNPJ (Cadastro Nacional da Pessoa Jurídica) — company taxpayer number.
//!
//! 14 digits: an 8-digit root, a 4-digit branch number, and two check
//! digits computed with fixed weight tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::digits::{digits_to_string, expect_check_digit, fixed_digits};
use super::error::DocumentError;

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Check whether `input` contains a valid CNPJ.
///
/// ```
/// assert!(lexsum::is_valid_cnpj("11.222.333/0001-81"));
/// assert!(!lexsum::is_valid_cnpj("11.222.333/0001-82"));
/// ```
pub fn is_valid_cnpj(input: &str) -> bool {
    check_cnpj(input).is_ok()
}

/// Compute both check digits for a 12-digit CNPJ base.
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(base, &FIRST_WEIGHTS);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    [first, check_digit(&extended, &SECOND_WEIGHTS)]
}

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

fn check_cnpj(input: &str) -> Result<[u8; CNPJ_LEN], DocumentError> {
    let digits = fixed_digits::<CNPJ_LEN>(input, "14")?;
    let mut base = [0u8; 12];
    base.copy_from_slice(&digits[..12]);

    let [first, second] = cnpj_check_digits(&base);
    expect_check_digit(&digits, 12, first)?;
    expect_check_digit(&digits, 13, second)?;
    Ok(digits)
}

/// Render a CNPJ with the standard mask `00.000.000/0000-00`.
///
/// Only the digit count is checked, not the checksum.
pub fn format_cnpj(input: &str) -> Option<String> {
    let c = super::clean_document(input);
    if c.len() != CNPJ_LEN {
        return None;
    }
    Some(mask(&c))
}

fn mask(c: &str) -> String {
    format!(
        "{}.{}.{}/{}-{}",
        &c[..2],
        &c[2..5],
        &c[5..8],
        &c[8..12],
        &c[12..]
    )
}

/// A checksum-valid CNPJ, stored as its 14 cleaned digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Parse and validate a CNPJ from free-form input.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        match check_cnpj(input) {
            Ok(digits) => Ok(Self(digits_to_string(&digits))),
            Err(err) => {
                debug!(reason = %err, "rejected CNPJ");
                Err(err)
            }
        }
    }

    /// Build a CNPJ from a 12-digit base (root + branch), appending the
    /// computed check digits.
    pub fn from_base(base: [u8; 12]) -> Result<Self, DocumentError> {
        if let Some(position) = base.iter().position(|&d| d > 9) {
            return Err(DocumentError::InvalidDigit { position });
        }
        let check = cnpj_check_digits(&base);
        let mut all = base.to_vec();
        all.extend_from_slice(&check);
        Self::parse(&digits_to_string(&all))
    }

    /// The 14 cleaned digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 8-digit company root shared by all branches.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number ("0001" is the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// Whether this CNPJ identifies the head office (branch "0001").
    pub fn is_head_office(&self) -> bool {
        self.branch() == "0001"
    }

    /// The masked form, e.g. "11.222.333/0001-81".
    pub fn formatted(&self) -> String {
        mask(&self.0)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid() {
        assert!(is_valid_cnpj("11.222.333/0001-81"));
        assert!(is_valid_cnpj("11222333000181"));
    }

    #[test]
    fn check_digits_for_known_base() {
        assert_eq!(
            cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]),
            [8, 1]
        );
    }

    #[test]
    fn small_remainder_maps_to_zero() {
        let mut base = [0u8; 12];
        // 1·2 = 2 → 11 - 2
        base[3] = 1;
        assert_eq!(cnpj_check_digits(&base)[0], 9);
        // 5·9 = 45, remainder 1
        base[3] = 0;
        base[4] = 5;
        assert_eq!(cnpj_check_digits(&base)[0], 0);
    }

    #[test]
    fn repeated_digits_rejected() {
        for d in 0..=9 {
            let s = d.to_string().repeat(14);
            assert!(!is_valid_cnpj(&s), "{s} should be rejected");
        }
    }

    #[test]
    fn check_digit_mismatch() {
        assert_eq!(
            Cnpj::parse("11.222.333/0001-91").unwrap_err(),
            DocumentError::CheckDigit {
                position: 12,
                expected: 8,
                found: 9
            }
        );
        assert_eq!(
            Cnpj::parse("11.222.333/0001-82").unwrap_err(),
            DocumentError::CheckDigit {
                position: 13,
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!is_valid_cnpj("11144477735"));
        assert!(!is_valid_cnpj("112223330001811"));
    }

    #[test]
    fn root_and_branch() {
        let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.root(), "11222333");
        assert_eq!(cnpj.branch(), "0001");
        assert!(cnpj.is_head_office());
    }

    #[test]
    fn masked_form() {
        assert_eq!(
            format_cnpj("11222333000181").as_deref(),
            Some("11.222.333/0001-81")
        );
        assert_eq!(format_cnpj("1122233300018"), None);
    }

    #[test]
    fn from_base_appends_check_digits() {
        let cnpj = Cnpj::from_base([1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]).unwrap();
        assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
    }
}
