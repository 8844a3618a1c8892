//! Error types for the editor crate.
//!
//! The editor store itself is deliberately forgiving: operations on stale
//! ids and empty history stacks are no-ops. The only failures surfaced as
//! errors are boundary ones, raised when stamping a node from a palette
//! definition or parsing a drag payload.

use std::fmt;

/// Errors from palette and node factory operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// A palette definition carried no node type.
    MissingNodeType,
    /// A drag payload could not be parsed as a node definition.
    MalformedPayload { details: String },
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNodeType => {
                write!(f, "node definition is missing a type")
            }
            Self::MalformedPayload { details } => {
                write!(f, "malformed drag payload: {details}")
            }
        }
    }
}

impl std::error::Error for EditorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_node_type_display() {
        let err = EditorError::MissingNodeType;
        assert!(err.to_string().contains("missing a type"));
    }

    #[test]
    fn malformed_payload_display() {
        let err = EditorError::MalformedPayload {
            details: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("malformed drag payload"));
        assert!(err.to_string().contains("line 1"));
    }
}
