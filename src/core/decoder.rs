use crate::domain::model::{Encoding, ScanEntry};
use crate::utils::error::{Result, ScanError};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// Seven digits, five-digit gram field, check digit. Whole input only.
static EAN_13: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7}([0-9]{5})[0-9]$").expect("valid EAN-13 pattern"));

/// AI 310, decimal exponent, six-digit mantissa. Anywhere in the input.
static GS1_WEIGHT_310: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"310([0-9])([0-9]{6})").expect("valid AI 310x pattern"));

/// Decodes a raw scan into a `(code, weight)` pair.
pub fn decode(raw: &str) -> Result<ScanEntry> {
    decode_with_encoding(raw).map(|(entry, _)| entry)
}

/// Like [`decode`], also reporting which layout matched.
///
/// The EAN-13 layout is tried first and must span the whole input. The AI 310x
/// layout is searched for anywhere and the leftmost match wins.
pub fn decode_with_encoding(raw: &str) -> Result<(ScanEntry, Encoding)> {
    if let Some(caps) = EAN_13.captures(raw) {
        let grams = parse_digits(raw, &caps[1])?;
        let entry = ScanEntry {
            code: caps[0].to_string(),
            weight: Decimal::new(grams, 3),
        };
        tracing::debug!(code = %entry.code, weight = %entry.weight, "decoded EAN-13 scan");
        return Ok((entry, Encoding::Ean13));
    }

    if let Some(caps) = GS1_WEIGHT_310.captures(raw) {
        let exponent = parse_digits(raw, &caps[1])?;
        let mantissa = parse_digits(raw, &caps[2])?;
        let entry = ScanEntry {
            code: caps[0].to_string(),
            weight: Decimal::new(mantissa, exponent as u32),
        };
        tracing::debug!(code = %entry.code, weight = %entry.weight, "decoded AI 310x scan");
        return Ok((entry, Encoding::Gs1Weight310));
    }

    tracing::warn!(raw = %raw, "scan matches no known encoding");
    Err(invalid(raw))
}

/// Turns one raw input line into text, dropping its line terminator.
///
/// Bytes that are not UTF-8 can't be a recognized code, so they are rejected
/// as an invalid scan carrying a lossy rendering of the input.
pub fn scan_text(line: &[u8]) -> Result<&str> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    std::str::from_utf8(line).map_err(|_| {
        let raw = String::from_utf8_lossy(line).into_owned();
        tracing::warn!(raw = %raw, "scan is not valid UTF-8");
        ScanError::InvalidScanFormat { raw }
    })
}

fn parse_digits(raw: &str, digits: &str) -> Result<i64> {
    digits.parse::<i64>().map_err(|_| invalid(raw))
}

fn invalid(raw: &str) -> ScanError {
    ScanError::InvalidScanFormat {
        raw: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_ean13_uses_digits_eight_to_twelve_as_grams() {
        let entry = decode("1234567001289").unwrap();
        assert_eq!(entry.code, "1234567001289");
        assert_eq!(entry.weight, dec("0.128"));
    }

    #[test]
    fn test_ean13_full_scale_and_zero() {
        assert_eq!(decode("0000000999990").unwrap().weight, dec("99.999"));
        assert_eq!(decode("2400000000007").unwrap().weight, Decimal::ZERO);
    }

    #[test]
    fn test_ean13_must_span_whole_input() {
        // 14 digits: not EAN-13, and no "310" run, so rejected.
        assert!(decode("12345670012890").is_err());
        assert!(decode(" 1234567001289").is_err());
        assert!(decode("1234567001289\n").is_err());
    }

    #[test]
    fn test_gs1_unanchored_match() {
        let (entry, encoding) = decode_with_encoding("X310212345670Y").unwrap();
        assert_eq!(encoding, Encoding::Gs1Weight310);
        assert_eq!(entry.code, "3102123456");
        assert_eq!(entry.weight, dec("1234.56"));
    }

    #[test]
    fn test_gs1_exponent_scales_mantissa() {
        assert_eq!(decode("3100000250").unwrap().weight, dec("250"));
        assert_eq!(decode("3103001250").unwrap().weight, dec("1.25"));
        assert_eq!(decode("3109123456").unwrap().weight, dec("0.000123456"));
    }

    #[test]
    fn test_gs1_leftmost_match_wins() {
        let entry = decode("01095011010209173103001500310200200021ABC").unwrap();
        assert_eq!(entry.code, "3103001500");
        assert_eq!(entry.weight, dec("1.5"));
    }

    #[test]
    fn test_thirteen_digits_prefer_ean13_even_with_310_inside() {
        let (entry, encoding) = decode_with_encoding("3102123456789").unwrap();
        assert_eq!(encoding, Encoding::Ean13);
        assert_eq!(entry.code, "3102123456789");
        assert_eq!(entry.weight, dec("45.678"));
    }

    #[test]
    fn test_rejects_unknown_input_with_raw_string() {
        for raw in ["", "hello", "310123", "123456789012", "31O2123456"] {
            let err = decode(raw).unwrap_err();
            assert_eq!(err.raw_input(), Some(raw));
        }
    }

    #[test]
    fn test_scan_text_strips_terminator() {
        assert_eq!(scan_text(b"1234567001289\r\n").unwrap(), "1234567001289");
        assert_eq!(scan_text(b"3103001500").unwrap(), "3103001500");
    }

    #[test]
    fn test_scan_text_rejects_invalid_utf8() {
        let err = scan_text(b"31030\xd1\n").unwrap_err();
        assert_eq!(err.raw_input(), Some("31030\u{FFFD}"));
    }

    #[test]
    fn test_non_ascii_digits_are_not_digits() {
        // Arabic-Indic digits
        assert!(decode("١٢٣٤٥٦٧٠٠١٢٨٩").is_err());
    }
}
