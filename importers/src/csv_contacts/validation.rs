use regex::Regex;

/// Optional `+`, a non-zero leading digit, then 3 to 14 more digits
const PHONE_PATTERN: &str = r"^\+?[1-9][0-9]{3,14}$";

/// `local@domain.tld` with no whitespace and a single `@`
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Removes whitespace, hyphens and parentheses from a phone number.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

pub struct ContactValidator {
    phone: Regex,
    email: Regex,
}

impl ContactValidator {
    pub fn new() -> Self {
        Self {
            phone: Regex::new(PHONE_PATTERN).unwrap(),
            email: Regex::new(EMAIL_PATTERN).unwrap(),
        }
    }

    /// Checks an already normalized phone number.
    pub fn is_valid_phone(&self, phone: &str) -> bool {
        self.phone.is_match(phone)
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email.is_match(email)
    }
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new()
    }
}
