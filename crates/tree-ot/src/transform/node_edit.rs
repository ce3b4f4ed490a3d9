//! Transforms for insert/remove and path-only operations on the left.
//!
//! These give the other half of every move transform: when a replica has
//! applied a move first, the concurrent insert or remove must be replayed
//! after it with the same conflict decisions [`super::move_node`] made.

use std::slice;

use crate::path;
use crate::transform::batch::{transform_edit, x_transform};
use crate::transform::move_codec::decompose;
use crate::types::{Operation, Side, TransformError};

/// Transform an `insert_node` or `remove_node` so it applies after `right`.
pub fn transform_node_edit(
    left: &Operation,
    right: &Operation,
    side: Side,
) -> Result<Vec<Operation>, TransformError> {
    match right {
        Operation::InsertNode { .. } | Operation::RemoveNode { .. } => {
            Ok(transform_edit(left, right, side).into_iter().collect())
        }
        Operation::MoveNode { path: from, new_path: to } => Ok(against_move(left, from, to, side)),
        Operation::SetNode { .. } | Operation::InsertText { .. } | Operation::RemoveText { .. } => {
            Ok(vec![left.clone()])
        }
        Operation::SplitNode { .. } | Operation::MergeNode { .. } => {
            Err(TransformError::Unsupported {
                left: left.kind(),
                right: right.kind(),
            })
        }
    }
}

/// Rebase an operation that only addresses a node (`set_node`, text edits).
///
/// The operation disappears with its node. Split and merge would also need
/// offset arithmetic and are rejected.
pub fn transform_path_only(
    left: &Operation,
    right: &Operation,
) -> Result<Vec<Operation>, TransformError> {
    match right {
        Operation::SplitNode { .. } | Operation::MergeNode { .. } => {
            Err(TransformError::Unsupported {
                left: left.kind(),
                right: right.kind(),
            })
        }
        _ => Ok(path::transform(left.path(), right)
            .map(|p| left.with_path(p))
            .into_iter()
            .collect()),
    }
}

fn against_move(left: &Operation, from: &[usize], to: &[usize], side: Side) -> Vec<Operation> {
    if path::equals(from, to) {
        return vec![left.clone()];
    }
    let at = left.path();
    let is_remove = matches!(left, Operation::RemoveNode { .. });

    // Edits inside the moved subtree travel with it.
    if path::is_ancestor(from, at) || (is_remove && path::equals(from, at)) {
        let moved = Operation::MoveNode {
            path: from.to_vec(),
            new_path: to.to_vec(),
        };
        return path::transform(at, &moved)
            .map(|p| left.with_path(p))
            .into_iter()
            .collect();
    }

    let (rr, ri) = decompose(from, to);
    let (mut l, _) = x_transform(slice::from_ref(left), &[rr, ri.clone()], side);

    // A move whose source is removed and whose destination survives is
    // discarded on the other replica, so the moved node has to go here too.
    if is_remove && path::is_ancestor(at, from) && !path::is_ancestor(at, ri.path()) {
        let carried = l.first().and_then(|removed| path::transform(ri.path(), removed));
        if let Some(p) = carried {
            l.push(Operation::remove_placeholder(p));
        }
    }

    l
}
