//! CPF (Cadastro de Pessoas Físicas) — individual taxpayer number.
//!
//! 11 digits: a 9-digit base followed by two modulo-11 check digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::digits::{digits_to_string, expect_check_digit, fixed_digits};
use super::error::DocumentError;

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Check whether `input` contains a valid CPF.
///
/// Punctuation and whitespace are ignored. Never panics; malformed input
/// is simply `false`.
///
/// ```
/// assert!(lexsum::is_valid_cpf("111.444.777-35"));
/// assert!(!lexsum::is_valid_cpf("111.444.777-36"));
/// assert!(!lexsum::is_valid_cpf("000.000.000-00"));
/// ```
pub fn is_valid_cpf(input: &str) -> bool {
    check_cpf(input).is_ok()
}

/// Compute both check digits for a 9-digit CPF base.
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    [first, check_digit(&extended)]
}

/// Weights run from `len + 1` down to 2; `(sum * 10) % 11`, with 10 mapped to 0.
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

fn check_cpf(input: &str) -> Result<[u8; CPF_LEN], DocumentError> {
    let digits = fixed_digits::<CPF_LEN>(input, "11")?;
    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);

    let [first, second] = cpf_check_digits(&base);
    expect_check_digit(&digits, 9, first)?;
    expect_check_digit(&digits, 10, second)?;
    Ok(digits)
}

/// Render a CPF with the standard mask `000.000.000-00`.
///
/// Only the digit count is checked, not the checksum. Returns `None` when
/// the input does not clean to exactly 11 digits.
pub fn format_cpf(input: &str) -> Option<String> {
    let c = super::clean_document(input);
    if c.len() != CPF_LEN {
        return None;
    }
    Some(format!("{}.{}.{}-{}", &c[..3], &c[3..6], &c[6..9], &c[9..]))
}

/// A checksum-valid CPF, stored as its 11 cleaned digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse and validate a CPF from free-form input.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        match check_cpf(input) {
            Ok(digits) => Ok(Self(digits_to_string(&digits))),
            Err(err) => {
                debug!(reason = %err, "rejected CPF");
                Err(err)
            }
        }
    }

    /// Build a CPF from a 9-digit base, appending the computed check digits.
    ///
    /// Fails if any base value is above 9 or the resulting number consists
    /// of one repeated digit.
    pub fn from_base(base: [u8; 9]) -> Result<Self, DocumentError> {
        if let Some(position) = base.iter().position(|&d| d > 9) {
            return Err(DocumentError::InvalidDigit { position });
        }
        let check = cpf_check_digits(&base);
        let mut all = base.to_vec();
        all.extend_from_slice(&check);
        Self::parse(&digits_to_string(&all))
    }

    /// The 11 cleaned digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The masked form, e.g. "111.444.777-35".
    pub fn formatted(&self) -> String {
        let c = &self.0;
        format!("{}.{}.{}-{}", &c[..3], &c[3..6], &c[6..9], &c[9..])
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid() {
        assert!(is_valid_cpf("111.444.777-35"));
        assert!(is_valid_cpf("11144477735"));
        assert!(is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn check_digits_for_known_base() {
        assert_eq!(cpf_check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), [3, 5]);
        assert_eq!(cpf_check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), [2, 5]);
    }

    #[test]
    fn remainder_ten_maps_to_zero() {
        // 2·6 = 12 → 120 % 11 = 10
        assert_eq!(cpf_check_digits(&[0, 0, 0, 0, 0, 0, 0, 0, 6])[0], 0);
    }

    #[test]
    fn first_check_digit_mismatch() {
        let err = Cpf::parse("111.444.777-45").unwrap_err();
        assert_eq!(
            err,
            DocumentError::CheckDigit {
                position: 9,
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn second_check_digit_mismatch() {
        let err = Cpf::parse("111.444.777-36").unwrap_err();
        assert_eq!(
            err,
            DocumentError::CheckDigit {
                position: 10,
                expected: 5,
                found: 6
            }
        );
    }

    #[test]
    fn repeated_digits_rejected() {
        for d in 0..=9 {
            let s = d.to_string().repeat(11);
            assert!(!is_valid_cpf(&s), "{s} should be rejected");
        }
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("1114447773"));
        assert!(!is_valid_cpf("111444777350"));
    }

    #[test]
    fn masked_form() {
        assert_eq!(format_cpf("11144477735").as_deref(), Some("111.444.777-35"));
        assert_eq!(format_cpf("123"), None);
    }

    #[test]
    fn from_base_appends_check_digits() {
        let cpf = Cpf::from_base([1, 1, 1, 4, 4, 4, 7, 7, 7]).unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
        assert_eq!(cpf.to_string(), "111.444.777-35");
    }

    #[test]
    fn from_base_rejects_out_of_range() {
        assert!(Cpf::from_base([1, 1, 1, 4, 4, 4, 7, 7, 12]).is_err());
    }
}
