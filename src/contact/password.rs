//! Signup password policy.

use std::fmt;

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Characters that satisfy the special-character rule.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A password policy rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    /// At least [`PASSWORD_MIN_LEN`] characters.
    MinLength,
    /// At least one ASCII uppercase letter.
    Uppercase,
    /// At least one ASCII lowercase letter.
    Lowercase,
    /// At least one ASCII digit.
    Digit,
    /// At least one character from [`PASSWORD_SPECIALS`].
    Special,
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength => write!(f, "must have at least {PASSWORD_MIN_LEN} characters"),
            Self::Uppercase => f.write_str("must contain an uppercase letter"),
            Self::Lowercase => f.write_str("must contain a lowercase letter"),
            Self::Digit => f.write_str("must contain a digit"),
            Self::Special => f.write_str("must contain a special character"),
        }
    }
}

/// Check a password against the signup policy.
///
/// Returns every violated rule, in declaration order; an empty vector
/// means the password is acceptable.
pub fn check_password(password: &str) -> Vec<PasswordRule> {
    let mut violated = Vec::new();
    if password.chars().count() < PASSWORD_MIN_LEN {
        violated.push(PasswordRule::MinLength);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violated.push(PasswordRule::Uppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violated.push(PasswordRule::Lowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violated.push(PasswordRule::Digit);
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        violated.push(PasswordRule::Special);
    }
    violated
}
