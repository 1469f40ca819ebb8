use bytes::{BufMut, BytesMut};

use crate::internal::error::{Error, Result};

/// Width of a tag in characters.
pub const TAG_LEN: usize = 2;
/// Width of a tag plus its length digits.
pub const HEADER_LEN: usize = 4;
/// Largest value length two decimal digits can carry.
pub const MAX_VALUE_LEN: usize = 99;

fn is_two_digits(raw: &[u8]) -> bool {
    raw.len() == 2 && raw.iter().all(u8::is_ascii_digit)
}

/// Checks that `tag` is exactly two ASCII decimal digits.
pub fn validate_tag(tag: &str) -> Result<()> {
    if is_two_digits(tag.as_bytes()) {
        Ok(())
    } else {
        Err(Error::InvalidTag(tag.to_string()))
    }
}

/// Writes `tag` followed by `length` as two zero-padded decimal digits.
pub fn encode_header(tag: &str, length: usize, buf: &mut BytesMut) -> Result<()> {
    validate_tag(tag)?;
    if length > MAX_VALUE_LEN {
        return Err(Error::InvalidLength { tag: tag.to_string(), length });
    }

    buf.put_slice(tag.as_bytes());
    buf.put_u8(b'0' + (length / 10) as u8);
    buf.put_u8(b'0' + (length % 10) as u8);
    Ok(())
}

/// Reads a record header from the front of `data`.
///
/// Returns the tag and the declared value length, or `None` when `data` is
/// shorter than a header or any header character is not a decimal digit.
pub fn decode_header(data: &str) -> Option<(&str, usize)> {
    let raw = data.as_bytes();
    if raw.len() < HEADER_LEN {
        return None;
    }
    let (tag, length) = (&raw[..TAG_LEN], &raw[TAG_LEN..HEADER_LEN]);
    if !is_two_digits(tag) || !is_two_digits(length) {
        return None;
    }

    let length = usize::from(length[0] - b'0') * 10 + usize::from(length[1] - b'0');
    // The first four bytes are ASCII, so slicing at TAG_LEN is on a char boundary
    Some((&data[..TAG_LEN], length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tag() {
        assert!(validate_tag("00").is_ok());
        assert!(validate_tag("99").is_ok());
        assert_eq!(validate_tag("1"), Err(Error::InvalidTag("1".to_string())));
        assert_eq!(validate_tag("100"), Err(Error::InvalidTag("100".to_string())));
        assert_eq!(validate_tag("a1"), Err(Error::InvalidTag("a1".to_string())));
        assert_eq!(validate_tag("１2"), Err(Error::InvalidTag("１2".to_string())));
    }

    #[test]
    fn test_encode_header() {
        let mut buf = BytesMut::new();
        encode_header("54", 4, &mut buf).unwrap();
        encode_header("62", 99, &mut buf).unwrap();
        encode_header("00", 0, &mut buf).unwrap();
        assert_eq!(&buf[..], b"540462990000");
    }

    #[test]
    fn test_encode_header_errors() {
        let mut buf = BytesMut::new();
        let result = encode_header("62", 100, &mut buf);
        assert_eq!(result, Err(Error::InvalidLength { tag: "62".to_string(), length: 100 }));

        let result = encode_header("6", 2, &mut buf);
        assert_eq!(result, Err(Error::InvalidTag("6".to_string())));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_header() {
        assert_eq!(decode_header("0103333"), Some(("01", 3)));
        assert_eq!(decode_header("6304"), Some(("63", 4)));
        assert_eq!(decode_header("010"), None);
        assert_eq!(decode_header("01a3"), None);
        assert_eq!(decode_header("x103"), None);
        assert_eq!(decode_header(""), None);
    }
}
