// Turns `PATH=VALUE` arguments into an ordered field tree.
//
// `38.01.00=970415` places a literal under tag "00" inside "01" inside "38".
// Tags appear in the output in the order they are first mentioned.

use emvqr::Field;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("field argument {0:?} is not PATH=VALUE")]
    MissingValue(String),

    #[error("field path {0:?} has an empty segment")]
    EmptySegment(String),

    #[error("tag path {0:?} is both a value and a template")]
    Conflict(String),
}

#[derive(Debug, Default)]
struct DraftNode {
    tag: String,
    value: Option<String>,
    children: Vec<DraftNode>,
}

impl DraftNode {
    fn child_mut(&mut self, tag: &str) -> &mut DraftNode {
        let index = match self.children.iter().position(|child| child.tag == tag) {
            Some(index) => index,
            None => {
                self.children.push(DraftNode { tag: tag.to_string(), ..Default::default() });
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    fn into_field(self, path: &str) -> Result<Field, DraftError> {
        match (self.value, self.children.is_empty()) {
            (Some(_), false) => Err(DraftError::Conflict(path.to_string())),
            (value, true) => Ok(Field::literal(self.tag, value.unwrap_or_default())),
            (None, false) => {
                let children = self
                    .children
                    .into_iter()
                    .map(|child| {
                        let child_path = format!("{}.{}", path, child.tag);
                        child.into_field(&child_path)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Field::nested(self.tag, children))
            }
        }
    }
}

/// Parses `PATH=VALUE` arguments into top-level fields.
///
/// Tag syntax is left to the encoder, which reports bad tags itself.
pub fn parse_fields(args: &[String]) -> Result<Vec<Field>, DraftError> {
    let mut root = DraftNode::default();

    for arg in args {
        let (path, value) = arg
            .split_once('=')
            .ok_or_else(|| DraftError::MissingValue(arg.clone()))?;
        if path.split('.').any(str::is_empty) {
            return Err(DraftError::EmptySegment(path.to_string()));
        }

        let node = path.split('.').fold(&mut root, |node, tag| node.child_mut(tag));
        if node.value.is_some() {
            tracing::warn!(path, "field given twice, keeping the last value");
        }
        node.value = Some(value.to_string());
    }

    root.children
        .into_iter()
        .map(|child| {
            let path = child.tag.clone();
            child.into_field(&path)
        })
        .collect()
}
