//! Normalization applied to captured values before transmission.

/// Rewrite a phone number into E.164 form.
///
/// Non-digits are stripped. Ten digits get a `+1` prefix, eleven digits
/// starting with `1` get a `+` prefix. Any other digit count also gets `+1`;
/// that output is not a canonical E.164 number and is passed through as-is.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        11 if digits.starts_with('1') => format!("+{digits}"),
        _ => format!("+1{digits}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digits() {
        assert_eq!(normalize_phone("(555) 123-4567"), "+15551234567");
        assert_eq!(normalize_phone("5551234567"), "+15551234567");
        assert_eq!(normalize_phone("555-111-2222"), "+15551112222");
    }

    #[test]
    fn test_eleven_digits_with_country_code() {
        assert_eq!(normalize_phone("15551234567"), "+15551234567");
        assert_eq!(normalize_phone("1 (555) 123-4567"), "+15551234567");
    }

    #[test]
    fn test_fallback_keeps_digits() {
        assert_eq!(normalize_phone("25551234567"), "+125551234567");
        assert_eq!(normalize_phone("555123456789"), "+1555123456789");
        assert_eq!(normalize_phone("123"), "+1123");
    }
}
