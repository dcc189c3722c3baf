//! Digit extraction shared by the CPF and CNPJ validators.

use super::error::DocumentError;

/// Remove every character that is not an ASCII digit, preserving order.
///
/// ```
/// assert_eq!(lexsum::clean_document("111.444.777-35"), "11144477735");
/// assert_eq!(lexsum::clean_document(""), "");
/// ```
pub fn clean_document(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Extract exactly `N` digits from raw input, rejecting repeated-digit numbers.
pub(crate) fn fixed_digits<const N: usize>(
    raw: &str,
    expected: &'static str,
) -> Result<[u8; N], DocumentError> {
    let digits: Vec<u8> = raw
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let digits: [u8; N] = digits
        .as_slice()
        .try_into()
        .map_err(|_| DocumentError::Length {
            expected,
            actual: digits.len(),
        })?;

    if digits.iter().all(|&d| d == digits[0]) {
        return Err(DocumentError::RepeatedDigits);
    }
    Ok(digits)
}

/// Render digits back into an ASCII string.
pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Compare a computed check digit against the digit found at `position`.
pub(crate) fn expect_check_digit(
    digits: &[u8],
    position: usize,
    expected: u8,
) -> Result<(), DocumentError> {
    let found = digits[position];
    if found == expected {
        Ok(())
    } else {
        Err(DocumentError::CheckDigit {
            position,
            expected,
            found,
        })
    }
}
