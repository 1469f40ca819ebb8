/// A single tagged field of a payload.
///
/// Fields are built by the caller, handed to the encoder in order, and never
/// retained by it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Field {
    pub tag: String,
    pub value: FieldValue,
}

/// Represents the value part of a field: literal text or a nested run of fields.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FieldValue {
    Literal(String),
    Nested(Vec<Field>),
}

impl Field {
    /// Creates a field holding literal text.
    pub fn literal(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Field { tag: tag.into(), value: FieldValue::Literal(value.into()) }
    }

    /// Creates a field whose value is the encoding of `children`, in order.
    pub fn nested(tag: impl Into<String>, children: Vec<Field>) -> Self {
        Field { tag: tag.into(), value: FieldValue::Nested(children) }
    }

    /// Returns the literal text, or `None` for a nested field.
    pub fn as_literal(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Literal(text) => Some(text),
            FieldValue::Nested(_) => None,
        }
    }

    /// Returns the child fields, or `None` for a literal field.
    pub fn children(&self) -> Option<&[Field]> {
        match &self.value {
            FieldValue::Literal(_) => None,
            FieldValue::Nested(children) => Some(children),
        }
    }
}

/// A raw record borrowed from a payload string.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Record<'a> {
    pub tag: &'a str,
    pub value: &'a str,
}

/// A best-effort view of a decoded payload, used for display.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Node<'a> {
    Literal { tag: &'a str, value: &'a str },
    Nested { tag: &'a str, raw: &'a str, children: Vec<Node<'a>> },
}

impl<'a> Node<'a> {
    pub fn tag(&self) -> &'a str {
        match self {
            Node::Literal { tag, .. } | Node::Nested { tag, .. } => tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_constructors() {
        let leaf = Field::literal("58", "VN");
        assert_eq!(leaf.tag, "58");
        assert_eq!(leaf.as_literal(), Some("VN"));
        assert!(leaf.children().is_none());

        let tree = Field::nested("62", vec![Field::literal("08", "tien le")]);
        assert!(tree.as_literal().is_none());
        assert_eq!(tree.children().unwrap(), &[Field::literal("08", "tien le")]);
    }

    #[test]
    fn test_node_tag() {
        let leaf = Node::Literal { tag: "01", value: "12" };
        let tree = Node::Nested { tag: "62", raw: "0102ab", children: vec![] };
        assert_eq!(leaf.tag(), "01");
        assert_eq!(tree.tag(), "62");
    }
}
