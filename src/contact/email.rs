//! E-mail address shape check.

/// Check whether `email` has the shape `local@domain.tld`.
///
/// The local part allows ASCII letters, digits, and `._%+-`; the domain
/// allows letters, digits, `.` and `-`; the top-level domain must be at
/// least two ASCII letters. Surrounding whitespace is not trimmed.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
        && !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}
