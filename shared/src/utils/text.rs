//! String helpers shared by the formatters and the list screens.

use std::fmt::Display;

/// Left-pads the decimal text of `value` with zeros up to `width` characters.
///
/// Text already at or past `width` is returned unchanged. A sign is part of the
/// text, so `pad(-5, 3)` gives `"0-5"`.
pub fn pad(value: impl Display, width: usize) -> String {
    format!("{:0>width$}", value.to_string(), width = width)
}

/// Upper-cases the first character and lower-cases the rest.
///
/// Absent values render as an empty string so table cells never show "None".
pub fn capitalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// The date portion of an ISO timestamp, i.e. everything before the `T`.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_short_values() {
        assert_eq!(pad(5, 2), "05");
        assert_eq!(pad(7, 3), "007");
        assert_eq!(pad(0, 2), "00");
    }

    #[test]
    fn test_pad_leaves_long_values_alone() {
        assert_eq!(pad(123, 2), "123");
        assert_eq!(pad(2024, 4), "2024");
    }

    #[test]
    fn test_pad_keeps_sign_inside() {
        assert_eq!(pad(-5, 2), "-5");
        assert_eq!(pad(-5, 3), "0-5");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(Some("contado")), "Contado");
        assert_eq!(capitalize(Some("TRANSFERENCIA")), "Transferencia");
        assert_eq!(capitalize(Some("mAYORISTA")), "Mayorista");
        assert_eq!(capitalize(Some("élan")), "Élan");
    }

    #[test]
    fn test_capitalize_empty_and_absent() {
        assert_eq!(capitalize(Some("")), "");
        assert_eq!(capitalize(None), "");
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-03-05T10:30:00-03:00"), "2024-03-05");
        assert_eq!(date_part("2024-03-05"), "2024-03-05");
        assert_eq!(date_part(""), "");
    }
}
