//! Field-level validators for booking submissions and admin forms.
//! Hand-rolled matchers for the same shapes the front end enforces.

use crate::constants::validation::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};

/// Indonesian phone number: `+62`, `62` or `0` prefix followed by 9-13 digits.
pub fn is_valid_phone(s: &str) -> bool {
    let rest = if let Some(r) = s.strip_prefix("+62") {
        r
    } else if let Some(r) = s.strip_prefix("62") {
        r
    } else if let Some(r) = s.strip_prefix('0') {
        r
    } else {
        return false;
    };

    (9..=13).contains(&rest.len()) && rest.bytes().all(|b| b.is_ascii_digit())
}

/// Loose e-mail shape: local part, `@`, dotted domain with an alphabetic
/// TLD of at least two characters.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"._%+-".contains(&b))
    {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty()
        || !host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-')
    {
        return false;
    }

    tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Display name: letters, spaces and dots, within the configured length.
pub fn is_valid_name(s: &str) -> bool {
    let len = s.chars().count();
    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len)
        && s.chars().all(|c| c.is_alphabetic() || c == ' ' || c == '.')
}
