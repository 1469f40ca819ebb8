use bytes::{BufMut, BytesMut};

use crate::codec::header::encode_header;
use crate::internal::error::Result;

/// Encodes a literal field: tag, byte length of `text`, then `text` verbatim.
///
/// No escaping is applied; the length counts UTF-8 bytes, not characters.
pub fn encode_literal(tag: &str, text: &str, buf: &mut BytesMut) -> Result<()> {
    encode_header(tag, text.len(), buf)?;
    buf.put_slice(text.as_bytes());
    Ok(())
}
