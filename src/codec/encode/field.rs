use bytes::BytesMut;

use crate::codec::types::{Field, FieldValue};
use crate::codec::Encode;
use crate::internal::error::Result;

use super::{basic::encode_literal, complex::encode_nested};

/// Implements the `Encode` trait for `Field`.
///
/// Literal values are written verbatim. Nested values are encoded child by
/// child and the aggregate becomes the parent's value.
impl Encode for Field {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        tracing::trace!(tag = %self.tag, "encoding field");
        match &self.value {
            FieldValue::Literal(text) => encode_literal(&self.tag, text, buf),
            FieldValue::Nested(children) => encode_nested(&self.tag, children, buf),
        }
    }
}

impl Encode for [Field] {
    fn encode(&self, buf: &mut BytesMut) -> Result<()> {
        for field in self {
            field.encode(buf)?;
        }
        Ok(())
    }
}
