// emvqr library entry point
//
// Encodes and decodes EMVCo merchant-presented QR payloads: two-digit tag,
// two-digit length, value, with a CRC-16 checksum record ("6304") at the end.

pub mod checksum;
pub mod codec;
pub mod fields;
pub mod internal;

pub use checksum::{append_crc, check_crc, compute_crc};
pub use codec::decode::{decode_tree, get_in, get_in_or_empty, records, Records};
pub use codec::encode::{build_payload, encode_field, encode_fields};
pub use codec::types::{Field, FieldValue, Node, Record};
pub use codec::Encode;
pub use internal::error::{Error, Result};
