// Encode module for EMVCo QR payloads

pub mod basic;
pub mod complex;
pub mod field;

use bytes::BytesMut;

use crate::checksum::append_crc;
use crate::codec::types::Field;
use crate::codec::Encode;
use crate::internal::error::Result;

/// Takes the encode buffer as text without copying it.
///
/// Every byte written comes from a `&str` or is an ASCII digit, so the UTF-8
/// check cannot fail; the `CodecError` path is unreachable in practice.
fn into_text(buf: BytesMut) -> Result<String> {
    Ok(String::from_utf8(Vec::from(buf))?)
}

/// Encodes a single field into its record text.
pub fn encode_field(field: &Field) -> Result<String> {
    let mut buf = BytesMut::new();
    field.encode(&mut buf)?;
    into_text(buf)
}

/// Encodes `fields` in order, without a checksum field.
///
/// Fails on the first tag that is not two digits or the first value (literal
/// or aggregate) longer than 99 bytes; no partial payload is returned.
pub fn encode_fields(fields: &[Field]) -> Result<String> {
    let mut buf = BytesMut::new();
    fields.encode(&mut buf)?;
    into_text(buf)
}

/// Encodes `fields` in order and appends the checksum field ("6304" + CRC).
///
/// The checksum field is always last. Callers must not include their own
/// tag "63" field.
pub fn build_payload(fields: &[Field]) -> Result<String> {
    let mut payload = encode_fields(fields)?;
    append_crc(&mut payload);
    tracing::debug!(fields = fields.len(), len = payload.len(), "built payload");
    Ok(payload)
}
