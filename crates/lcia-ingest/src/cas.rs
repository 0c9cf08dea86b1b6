//! CAS registry number formatting.

/// Formats a CAS registry number the way method sheets should have stored it.
///
/// Spreadsheets frequently keep CAS numbers as plain numbers (`7732185` or
/// `7732185.0`); those are rewritten as `7732-18-5`. Placeholders (`x`, `-`)
/// and blanks become empty; anything else is returned trimmed.
pub fn format_cas(raw: &str) -> String {
    let cas = raw.trim();
    if cas.is_empty() || cas == "x" || cas == "-" {
        return String::new();
    }
    match numeric_digits(cas) {
        Some(digits) if digits.len() > 4 => {
            let len = digits.len();
            format!(
                "{}-{}-{}",
                &digits[..len - 3],
                &digits[len - 3..len - 1],
                &digits[len - 1..]
            )
        }
        Some(digits) => digits,
        None => cas.to_string(),
    }
}

fn numeric_digits(cas: &str) -> Option<String> {
    if cas.bytes().all(|b| b.is_ascii_digit()) {
        return Some(cas.to_string());
    }
    let (whole, fraction) = cas.split_once('.')?;
    let integral = !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b == b'0');
    integral.then(|| whole.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cas_gets_dashes() {
        assert_eq!(format_cas("7732185"), "7732-18-5");
        assert_eq!(format_cas("124389.0"), "124-38-9");
        assert_eq!(format_cas(" 50000 "), "50-00-0");
    }

    #[test]
    fn short_numbers_are_left_alone() {
        assert_eq!(format_cas("1234"), "1234");
        assert_eq!(format_cas("12.0"), "12");
    }

    #[test]
    fn placeholders_and_text() {
        assert_eq!(format_cas("x"), "");
        assert_eq!(format_cas("-"), "");
        assert_eq!(format_cas(""), "");
        assert_eq!(format_cas("7440-43-9"), "7440-43-9");
        assert_eq!(format_cas("12.5"), "12.5");
    }
}
