use bytes::BytesMut;

use crate::codec::header::encode_header;
use crate::codec::types::Field;
use crate::codec::Encode;
use crate::internal::error::Result;

/// Encodes a nested field: the children are encoded in order and their
/// concatenation becomes the parent's value.
pub fn encode_nested(tag: &str, children: &[Field], buf: &mut BytesMut) -> Result<()> {
    let mut body = BytesMut::new();
    for child in children {
        // Recursively call encode for nested fields
        child.encode(&mut body)?;
    }

    encode_header(tag, body.len(), buf)?;
    buf.extend_from_slice(&body);
    Ok(())
}
