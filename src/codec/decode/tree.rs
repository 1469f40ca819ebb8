use crate::codec::header::HEADER_LEN;
use crate::codec::types::Node;

use super::records::records;

/// Decodes `data` into a record tree for display.
///
/// The wire format does not say which values are nested, so a value is
/// expanded when it parses completely as records and kept literal otherwise.
/// Short literals can therefore be misread as nested; use [`super::get_in`]
/// when the layout is known. Returns `None` when `data` itself is malformed.
pub fn decode_tree(data: &str) -> Option<Vec<Node<'_>>> {
    let mut iter = records(data);
    let mut nodes = Vec::new();

    for record in iter.by_ref() {
        let children = if record.value.len() >= HEADER_LEN {
            decode_tree(record.value)
        } else {
            None
        };
        nodes.push(match children {
            Some(children) => Node::Nested { tag: record.tag, raw: record.value, children },
            None => Node::Literal { tag: record.tag, value: record.value },
        });
    }

    if iter.is_malformed() {
        None
    } else {
        Some(nodes)
    }
}
