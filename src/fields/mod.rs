// Convenience constructors for EMVCo merchant-presented mode fields.
//
// Everything here only builds `Field` values; the codec has no knowledge of
// these tags.

pub mod amount;
pub mod tags;
pub mod vietqr;

pub use amount::{format_amount, minor_units, transaction_amount, transaction_amount_uint};

use crate::codec::header::validate_tag;
use crate::codec::types::Field;
use crate::internal::error::{Error, Result};

use tags::*;

/// A literal field.
pub fn string(tag: &str, value: &str) -> Field {
    Field::literal(tag, value)
}

/// A nested field holding `children` in order.
pub fn list(tag: &str, children: Vec<Field>) -> Field {
    Field::nested(tag, children)
}

/// Payload format indicator ("00"), always "01".
pub fn payload_format_indicator() -> Field {
    Field::literal(PAYLOAD_FORMAT_INDICATOR, "01")
}

/// Point of initiation method ("01"): "12" for a dynamic (single use) code,
/// "11" for a static one.
pub fn point_of_initiation_method(dynamic: bool) -> Field {
    Field::literal(POINT_OF_INITIATION_METHOD, if dynamic { "12" } else { "11" })
}

/// Merchant account information template under one of tags "02" to "51".
pub fn merchant_account_information(tag: &str, children: Vec<Field>) -> Result<Field> {
    validate_tag(tag)?;
    if !(MERCHANT_ACCOUNT_INFORMATION_FIRST..=MERCHANT_ACCOUNT_INFORMATION_LAST).contains(&tag) {
        return Err(Error::InvalidTag(tag.to_string()));
    }
    Ok(Field::nested(tag, children))
}

pub fn merchant_category_code(mcc: &str) -> Field {
    Field::literal(MERCHANT_CATEGORY_CODE, mcc)
}

/// Transaction currency ("53") as an ISO 4217 numeric code, e.g. "704".
pub fn transaction_currency(code: &str) -> Field {
    Field::literal(TRANSACTION_CURRENCY, code)
}

pub fn tip_or_convenience_indicator(value: &str) -> Field {
    Field::literal(TIP_OR_CONVENIENCE_INDICATOR, value)
}

/// Country code ("58") as an ISO 3166-1 alpha-2 code, e.g. "VN".
pub fn country_code(code: &str) -> Field {
    Field::literal(COUNTRY_CODE, code)
}

pub fn merchant_name(name: &str) -> Field {
    Field::literal(MERCHANT_NAME, name)
}

pub fn merchant_city(city: &str) -> Field {
    Field::literal(MERCHANT_CITY, city)
}

pub fn postal_code(code: &str) -> Field {
    Field::literal(POSTAL_CODE, code)
}

/// Additional data field template ("62").
pub fn additional_data(children: Vec<Field>) -> Field {
    Field::nested(ADDITIONAL_DATA, children)
}

pub fn bill_number(value: &str) -> Field {
    Field::literal(additional::BILL_NUMBER, value)
}

pub fn mobile_number(value: &str) -> Field {
    Field::literal(additional::MOBILE_NUMBER, value)
}

pub fn store_label(value: &str) -> Field {
    Field::literal(additional::STORE_LABEL, value)
}

pub fn loyalty_number(value: &str) -> Field {
    Field::literal(additional::LOYALTY_NUMBER, value)
}

pub fn reference_label(value: &str) -> Field {
    Field::literal(additional::REFERENCE_LABEL, value)
}

pub fn customer_label(value: &str) -> Field {
    Field::literal(additional::CUSTOMER_LABEL, value)
}

pub fn terminal_label(value: &str) -> Field {
    Field::literal(additional::TERMINAL_LABEL, value)
}

/// Purpose of transaction ("08"); VietQR shows it as the transfer message.
pub fn purpose_of_transaction(value: &str) -> Field {
    Field::literal(additional::PURPOSE_OF_TRANSACTION, value)
}
