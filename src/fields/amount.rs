use crate::codec::types::Field;
use crate::internal::error::{Error, Result};

use super::tags::TRANSACTION_AMOUNT;

/// Longest transaction amount the EMVCo layout allows.
const MAX_AMOUNT_LEN: usize = 13;

// ISO 4217 currencies without minor units, alphabetic and numeric codes.
const ZERO_DECIMAL: &[&str] = &[
    "BIF", "108", "CLP", "152", "DJF", "262", "GNF", "324", "ISK", "352", "JPY", "392",
    "KMF", "174", "KRW", "410", "PYG", "600", "RWF", "646", "UGX", "800", "UYI", "940",
    "VND", "704", "VUV", "548", "XAF", "950", "XOF", "952", "XPF", "953",
];

const THREE_DECIMAL: &[&str] = &[
    "BHD", "048", "IQD", "368", "JOD", "400", "KWD", "414", "LYD", "434", "OMR", "512",
    "TND", "788",
];

/// Number of minor-unit digits for `currency` (alphabetic or numeric code).
pub fn minor_units(currency: &str) -> u32 {
    let currency = currency.to_ascii_uppercase();
    if ZERO_DECIMAL.contains(&currency.as_str()) {
        0
    } else if THREE_DECIMAL.contains(&currency.as_str()) {
        3
    } else {
        2
    }
}

/// Renders `amount` for `currency`: rounded half away from zero to the
/// currency's minor units, trailing fractional zeros dropped.
pub fn format_amount(currency: &str, amount: f64) -> Result<String> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount(format!("{} is not a payable amount", amount)));
    }

    let decimals = minor_units(currency);
    let scale = 10u64.pow(decimals);
    let minor = (amount * scale as f64).round();
    if minor >= u64::MAX as f64 {
        return Err(Error::InvalidAmount(format!("{} is out of range", amount)));
    }
    let minor = minor as u64;

    let whole = minor / scale;
    let mut text = whole.to_string();
    if decimals > 0 {
        let fraction = format!("{:0width$}", minor % scale, width = decimals as usize);
        let fraction = fraction.trim_end_matches('0');
        if !fraction.is_empty() {
            text.push('.');
            text.push_str(fraction);
        }
    }

    if text.len() > MAX_AMOUNT_LEN {
        return Err(Error::InvalidAmount(format!("{} is longer than {} characters", text, MAX_AMOUNT_LEN)));
    }
    Ok(text)
}

/// Transaction amount ("54") for a decimal amount in `currency`.
pub fn transaction_amount(currency: &str, amount: f64) -> Result<Field> {
    Ok(Field::literal(TRANSACTION_AMOUNT, format_amount(currency, amount)?))
}

/// Transaction amount ("54") for a whole amount.
pub fn transaction_amount_uint(amount: u64) -> Field {
    Field::literal(TRANSACTION_AMOUNT, amount.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_units() {
        assert_eq!(minor_units("VND"), 0);
        assert_eq!(minor_units("704"), 0);
        assert_eq!(minor_units("jpy"), 0);
        assert_eq!(minor_units("USD"), 2);
        assert_eq!(minor_units("840"), 2);
        assert_eq!(minor_units("KWD"), 3);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("VND", 70000.90).unwrap(), "70001");
        assert_eq!(format_amount("VND", 6000.0).unwrap(), "6000");
        assert_eq!(format_amount("USD", 10.50).unwrap(), "10.5");
        assert_eq!(format_amount("USD", 12.0).unwrap(), "12");
        assert_eq!(format_amount("USD", 0.07).unwrap(), "0.07");
        assert_eq!(format_amount("USD", 0.125).unwrap(), "0.13");
        assert_eq!(format_amount("KWD", 1.25).unwrap(), "1.25");
        assert_eq!(format_amount("VND", 0.0).unwrap(), "0");
    }

    #[test]
    fn test_format_amount_errors() {
        assert!(matches!(format_amount("VND", -1.0), Err(Error::InvalidAmount(_))));
        assert!(matches!(format_amount("VND", f64::NAN), Err(Error::InvalidAmount(_))));
        assert!(matches!(format_amount("VND", f64::INFINITY), Err(Error::InvalidAmount(_))));
        assert!(matches!(format_amount("VND", 1e14), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_transaction_amount() {
        assert_eq!(transaction_amount("VND", 70000.90).unwrap(), Field::literal("54", "70001"));
        assert_eq!(transaction_amount_uint(6000), Field::literal("54", "6000"));
    }
}
