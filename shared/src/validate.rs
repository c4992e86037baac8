use lazy_static::lazy_static;
use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 8;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^\S+@\S+\.\S+$").expect("email regex");
}

/// Presence check used by the form fields and the endpoint body validation.
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Exactly ten digits once formatting characters are stripped.
pub fn valid_phone(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    digits == 10
}

pub fn valid_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_and_whitespace() {
        assert!(required("Aisha"));
        assert!(!required(""));
        assert!(!required("   "));
    }

    #[test]
    fn email_format() {
        assert!(valid_email("a@a.com"));
        assert!(valid_email("field.ops@relief.example.org"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("missing@domain"));
        assert!(!valid_email("spaces in@mail.com"));
    }

    #[test]
    fn phone_accepts_ten_digits_with_formatting() {
        assert!(valid_phone("5551234567"));
        assert!(valid_phone("(555) 123-4567"));
        assert!(!valid_phone("12345"));
        assert!(!valid_phone("555123456789"));
    }

    #[test]
    fn password_minimum_length() {
        assert!(valid_password("longenough"));
        assert!(!valid_password("short"));
    }
}
