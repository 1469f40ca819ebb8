// Payload checksum: CRC-16/CCITT-FALSE rendered as four uppercase hex digits.
//
// | Parameter  | Value  |
// |------------|--------|
// | Polynomial | 0x1021 |
// | Init       | 0xFFFF |
// | RefIn      | false  |
// | RefOut     | false  |
// | XorOut     | 0x0000 |
//
// The checksum covers every payload byte before it, including its own
// `6304` header, and is carried as the last record of the payload.

use crc::{Crc, CRC_16_IBM_3740};

/// Reserved tag of the checksum field.
pub const CRC_TAG: &str = "63";
/// Tag and length header of the checksum field.
pub const CRC_HEADER: &str = "6304";
/// Width of the rendered checksum.
pub const CRC_LEN: usize = 4;

/// CRC-16/CCITT-FALSE (catalogued as CRC-16/IBM-3740).
const CRC16_CCITT_FALSE: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Computes the checksum of `input` as four uppercase hex digits.
///
/// Any string is accepted; the empty string yields "FFFF".
pub fn compute_crc(input: &str) -> String {
    let crc = CRC16_CCITT_FALSE.checksum(input.as_bytes());
    tracing::trace!("computed CRC 0x{:04X} over {} bytes", crc, input.len());
    hex::encode_upper(crc.to_be_bytes())
}

/// Returns true when the last four characters of `payload` equal the
/// checksum of everything before them.
///
/// Never fails: a payload too short to hold a checksum header and value, or
/// one whose split point is not a character boundary, is simply invalid.
pub fn check_crc(payload: &str) -> bool {
    if payload.len() < CRC_HEADER.len() + CRC_LEN {
        tracing::debug!(len = payload.len(), "payload too short for a checksum field");
        return false;
    }

    let split = payload.len() - CRC_LEN;
    let (Some(prefix), Some(claimed)) = (payload.get(..split), payload.get(split..)) else {
        tracing::debug!("checksum split is not on a character boundary");
        return false;
    };

    let expected = compute_crc(prefix);
    if expected != claimed {
        tracing::debug!(%expected, %claimed, "checksum mismatch");
        return false;
    }
    true
}

/// Appends the checksum field to an encoded payload.
pub fn append_crc(payload: &mut String) {
    payload.push_str(CRC_HEADER);
    let crc = compute_crc(payload);
    payload.push_str(&crc);
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIETQR: &str = "00020101021262110807tien le38560010A0000007270126000697041501121133666688880208QRIBFTTA5303704540460005802VN63046893";

    #[test]
    fn test_compute_crc() {
        // Standard check value for CRC-16/CCITT-FALSE
        assert_eq!(compute_crc("123456789"), "29B1");
        assert_eq!(compute_crc(""), "FFFF");
        assert_eq!(compute_crc(&VIETQR[..VIETQR.len() - 4]), "6893");
    }

    #[test]
    fn test_compute_crc_is_zero_padded_uppercase() {
        for input in ["A", "0002010102116304", "tien le", "Phở"] {
            let crc = compute_crc(input);
            assert_eq!(crc.len(), 4);
            assert!(crc.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }
    }

    #[test]
    fn test_check_crc() {
        assert!(check_crc(VIETQR));
        assert!(!check_crc(&VIETQR.replace("tien le", "tienxle")));
    }

    #[test]
    fn test_check_crc_short_input() {
        assert!(!check_crc(""));
        assert!(!check_crc("000"));
        assert!(!check_crc("00000"));
        assert!(!check_crc("6304FFF"));
    }

    #[test]
    fn test_check_crc_is_case_sensitive() {
        let upper = "00020101021138560010A0000007270126000697041501121133666688880208QRIBFTTA54057000153037045802VN6304ED54";
        assert!(check_crc(upper));
        let lower = format!("{}ed54", &upper[..upper.len() - 4]);
        assert!(!check_crc(&lower));
    }

    #[test]
    fn test_check_crc_detects_single_character_flips() {
        let checked = &VIETQR[..VIETQR.len() - 4];
        for (i, c) in checked.char_indices() {
            let replacement = if c == '0' { "1" } else { "0" };
            let mut tampered = String::with_capacity(VIETQR.len());
            tampered.push_str(&VIETQR[..i]);
            tampered.push_str(replacement);
            tampered.push_str(&VIETQR[i + c.len_utf8()..]);
            assert!(!check_crc(&tampered), "flip at {} went undetected", i);
        }
    }

    #[test]
    fn test_check_crc_non_char_boundary() {
        // Multi-byte character straddling the checksum split
        assert!(!check_crc("000201ệệệ"));
    }

    #[test]
    fn test_append_crc() {
        let mut payload = String::from("00020101021262110807tien le38560010A0000007270126000697041501121133666688880208QRIBFTTA5303704540460005802VN");
        append_crc(&mut payload);
        assert_eq!(payload, VIETQR);
        assert!(check_crc(&payload));
    }
}
