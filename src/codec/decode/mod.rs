// Decode module for EMVCo QR payloads
//
// Decoding never fails loudly: payloads are scanned from untrusted QR
// content, so malformed records turn into "not found" results.

pub mod lookup;
pub mod records;
pub mod tree;

pub use lookup::{get_in, get_in_or_empty};
pub use records::{records, Records};
pub use tree::decode_tree;
