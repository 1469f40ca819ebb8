// Root and template tags of the EMVCo merchant-presented mode payload.

pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
pub const POINT_OF_INITIATION_METHOD: &str = "01";
/// First and last tags reserved for merchant account information templates.
pub const MERCHANT_ACCOUNT_INFORMATION_FIRST: &str = "02";
pub const MERCHANT_ACCOUNT_INFORMATION_LAST: &str = "51";
pub const MERCHANT_CATEGORY_CODE: &str = "52";
pub const TRANSACTION_CURRENCY: &str = "53";
pub const TRANSACTION_AMOUNT: &str = "54";
pub const TIP_OR_CONVENIENCE_INDICATOR: &str = "55";
pub const COUNTRY_CODE: &str = "58";
pub const MERCHANT_NAME: &str = "59";
pub const MERCHANT_CITY: &str = "60";
pub const POSTAL_CODE: &str = "61";
pub const ADDITIONAL_DATA: &str = "62";

/// Sub-tags of the additional data template ("62").
pub mod additional {
    pub const BILL_NUMBER: &str = "01";
    pub const MOBILE_NUMBER: &str = "02";
    pub const STORE_LABEL: &str = "03";
    pub const LOYALTY_NUMBER: &str = "04";
    pub const REFERENCE_LABEL: &str = "05";
    pub const CUSTOMER_LABEL: &str = "06";
    pub const TERMINAL_LABEL: &str = "07";
    pub const PURPOSE_OF_TRANSACTION: &str = "08";
}
