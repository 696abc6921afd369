//! Record validation rules.
//!
//! Validation blocks the offending action with a message; it never touches
//! storage. Referential integrity is deliberately not enforced (deleting a
//! route does not cascade to schedules), so the checks here are local to a
//! single collection.

/// Error type for validation failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{entity} {code} already exists")]
    DuplicateCode { entity: &'static str, code: String },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("invalid phone number: {0}")]
    InvalidPhone(String),
}

/// Requires a non-blank value.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Rejects a business code that is already present in the collection.
pub fn unique_code<'a, I>(
    entity: &'static str,
    code: &str,
    existing: I,
) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    if existing.into_iter().any(|c| c == code) {
        return Err(ValidationError::DuplicateCode {
            entity,
            code: code.to_owned(),
        });
    }
    Ok(())
}

/// Validates an email address. Empty values pass; validation only applies
/// once something was entered.
///
/// Accepts `local@domain.tld` where no part is empty and nothing contains
/// whitespace or a second `@`.
pub fn email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(value.to_owned()))
    }
}

fn is_valid_email(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validates a phone number: digits, spaces, `-`, `+` and parentheses.
/// Empty values pass.
pub fn phone(value: &str) -> Result<(), ValidationError> {
    let ok = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'));
    if ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank() {
        assert!(require("name", "").is_err());
        assert!(require("name", "   ").is_err());
        assert!(require("name", "Route 1").is_ok());
    }

    #[test]
    fn unique_code_rejects_existing() {
        let existing = ["R001", "R002"];
        assert_eq!(
            unique_code("route", "R001", existing),
            Err(ValidationError::DuplicateCode {
                entity: "route",
                code: "R001".into()
            })
        );
        assert!(unique_code("route", "R003", existing).is_ok());
    }

    #[test]
    fn email_accepts_common_shapes() {
        assert!(email("").is_ok());
        assert!(email("info@buscompany.com").is_ok());
        assert!(email("a.b@mail.example.org").is_ok());
    }

    #[test]
    fn email_rejects_malformed() {
        assert!(email("no-at-sign").is_err());
        assert!(email("two@@signs.com").is_err());
        assert!(email("spaces in@mail.com").is_err());
        assert!(email("@nodomain.com").is_err());
        assert!(email("user@nodot").is_err());
        assert!(email("user@.tld").is_err());
        assert!(email("user@host.").is_err());
    }

    #[test]
    fn phone_accepts_formatting_chars() {
        assert!(phone("").is_ok());
        assert!(phone("024 1234 5678").is_ok());
        assert!(phone("+84 (24) 1234-5678").is_ok());
    }

    #[test]
    fn phone_rejects_letters() {
        assert!(phone("call me").is_err());
        assert!(phone("123x456").is_err());
    }
}
