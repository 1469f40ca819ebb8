// VietQR (NAPAS 247) merchant account information, tag "38".

use crate::codec::types::Field;

/// Merchant account information tag used by VietQR.
pub const VIETQR_TAG: &str = "38";
/// NAPAS application identifier.
pub const NAPAS_GUID: &str = "A000000727";
/// Service code for a transfer to a bank account.
pub const SERVICE_ACCOUNT_TRANSFER: &str = "QRIBFTTA";
/// Service code for a transfer to a card.
pub const SERVICE_CARD_TRANSFER: &str = "QRIBFTTC";

fn napas_template(bank_bin: &str, beneficiary: &str, service: &str) -> Field {
    Field::nested(
        VIETQR_TAG,
        vec![
            Field::literal("00", NAPAS_GUID),
            Field::nested(
                "01",
                vec![Field::literal("00", bank_bin), Field::literal("01", beneficiary)],
            ),
            Field::literal("02", service),
        ],
    )
}

/// Template for a transfer to `account_number` at the bank identified by
/// `bank_bin` (six digit NAPAS BIN, e.g. "970415").
pub fn account_transfer(bank_bin: &str, account_number: &str) -> Field {
    napas_template(bank_bin, account_number, SERVICE_ACCOUNT_TRANSFER)
}

/// Template for a transfer to `card_number` issued by `bank_bin`.
pub fn card_transfer(bank_bin: &str, card_number: &str) -> Field {
    napas_template(bank_bin, card_number, SERVICE_CARD_TRANSFER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode::encode_field;

    #[test]
    fn test_account_transfer() {
        assert_eq!(
            encode_field(&account_transfer("970415", "113366668888")).unwrap(),
            "38560010A0000007270126000697041501121133666688880208QRIBFTTA"
        );
    }

    #[test]
    fn test_card_transfer() {
        let encoded = encode_field(&card_transfer("970436", "9704366800000001")).unwrap();
        assert!(encoded.starts_with("3860"));
        assert!(encoded.ends_with("0208QRIBFTTC"));
    }
}
