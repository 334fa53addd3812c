//! Form input validation
//!
//! Checks the create/edit screens run before sending anything to the API.
//! Each returns `true` when the raw input is acceptable.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::DateInput;

const MAX_PRODUCT_NAME_CHARS: usize = 100;

// Digits are ASCII only; `\d` in `regex` also matches other scripts
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid phone pattern"));
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("valid amount pattern"));
static QUANTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,3})?$").expect("valid quantity pattern"));

/// Category, brand and supplier names: anything but blank.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Product names are additionally capped at 100 characters.
pub fn is_valid_product_name(name: &str) -> bool {
    is_valid_name(name) && name.chars().count() <= MAX_PRODUCT_NAME_CHARS
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Ten to fifteen digits, optionally prefixed with `+`.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Money: up to two decimals, strictly positive.
pub fn is_valid_amount(amount: &str) -> bool {
    AMOUNT_RE.is_match(amount) && is_positive(amount)
}

pub fn is_valid_price(price: &str) -> bool {
    is_valid_amount(price)
}

/// Product quantities may be weighed, so three decimals are allowed.
pub fn is_valid_quantity(quantity: &str) -> bool {
    QUANTITY_RE.is_match(quantity) && is_positive(quantity)
}

/// A date-only string or a timestamp that resolves to a real instant.
pub fn is_valid_date(text: &str) -> bool {
    DateInput::parse(text).to_utc().is_ok()
}

fn is_positive(number: &str) -> bool {
    number.parse::<f64>().map(|n| n > 0.0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("Limpieza"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   \t"));
    }

    #[test]
    fn test_is_valid_product_name_length_cap() {
        assert!(is_valid_product_name(&"a".repeat(100)));
        assert!(!is_valid_product_name(&"a".repeat(101)));
        // Counted in characters, not bytes
        assert!(is_valid_product_name(&"ñ".repeat(100)));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ventas@pana.com.py"));
        assert!(!is_valid_email("ventas@pana"));
        assert!(!is_valid_email("ventas pana@x.com"));
        assert!(!is_valid_email("@pana.com"));
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("0981123456"));
        assert!(is_valid_phone("+595981123456"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("0981-123-456"));
        assert!(!is_valid_phone("+1234567890123456"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic and full-width digits
        assert!(!is_valid_phone("٠٩٨١١٢٣٤٥٦"));
        assert!(!is_valid_phone("０９８１１２３４５６"));
        assert!(!is_valid_amount("١٢"));
        assert!(!is_valid_quantity("１.５"));
    }

    #[test]
    fn test_is_valid_amount() {
        assert!(is_valid_amount("15000"));
        assert!(is_valid_amount("12.5"));
        assert!(is_valid_amount("12.50"));
        assert!(!is_valid_amount("12.505"));
        assert!(!is_valid_amount("0"));
        assert!(!is_valid_amount("0.00"));
        assert!(!is_valid_amount("-3"));
        assert!(!is_valid_amount("12,50"));
        assert!(!is_valid_amount(""));
    }

    #[test]
    fn test_is_valid_quantity() {
        assert!(is_valid_quantity("1.250"));
        assert!(!is_valid_quantity("1.2505"));
        assert!(!is_valid_quantity("0.000"));
        assert!(!is_valid_quantity("abc"));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2024-03-05"));
        assert!(is_valid_date("2024-03-05T10:15"));
        assert!(is_valid_date("2024-03-05T10:15:00-03:00"));
        assert!(!is_valid_date("2024-02-30"));
        assert!(!is_valid_date("mañana"));
        assert!(!is_valid_date(""));
    }
}
