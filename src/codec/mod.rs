// Codec module for EMVCo merchant-presented QR payloads.
//
// A payload is a flat run of `TTLLV...` records: a two-digit tag, a two-digit
// decimal length and the value. A value is either literal text or another run
// of records.

pub mod encode;
pub mod decode;
pub mod header;
pub mod types;

use bytes::BytesMut;

use crate::internal::error::Result;

/// Writes the canonical record encoding of a value into a buffer.
pub trait Encode {
    fn encode(&self, buf: &mut BytesMut) -> Result<()>;
}
