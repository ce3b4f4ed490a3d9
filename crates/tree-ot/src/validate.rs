//! Checks on transform results before they reach a document.
//!
//! Synthetic edits carry [`Node::Placeholder`](crate::types::Node) payloads.
//! A placeholder may ride on a removal (the node is addressed by path only)
//! but must never be inserted into a document.

use thiserror::Error;

use crate::types::{OpKind, Operation};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("operation [index = {index}] inserts a placeholder node")]
    PlaceholderInsert { index: usize },
    #[error("operation [index = {index}] has unexpected kind {kind}")]
    UnexpectedKind { index: usize, kind: OpKind },
    #[error("expected at most 3 operations, got {0}")]
    TooMany(usize),
}

/// Verify that no operation inserts a placeholder payload.
pub fn check_no_placeholder_insert(ops: &[Operation]) -> Result<(), ValidationError> {
    for (index, op) in ops.iter().enumerate() {
        if let Operation::InsertNode { node, .. } = op {
            if node.is_placeholder() {
                return Err(ValidationError::PlaceholderInsert { index });
            }
        }
    }
    Ok(())
}

/// Verify the shape of a move transform result: at most three operations,
/// each a move, remove or split, none inserting a placeholder.
pub fn check_move_result(ops: &[Operation]) -> Result<(), ValidationError> {
    if ops.len() > 3 {
        return Err(ValidationError::TooMany(ops.len()));
    }
    for (index, op) in ops.iter().enumerate() {
        match op.kind() {
            OpKind::MoveNode | OpKind::RemoveNode | OpKind::SplitNode => {}
            kind => return Err(ValidationError::UnexpectedKind { index, kind }),
        }
    }
    check_no_placeholder_insert(ops)
}
