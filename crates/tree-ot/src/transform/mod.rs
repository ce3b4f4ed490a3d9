//! Operational transformation of tree edits.
//!
//! [`transform`] rewrites a *left* operation (local, not yet applied) so it
//! can be applied after a concurrent *right* operation that the replica has
//! already applied. Transforming against a sequence of operations is done by
//! calling it once per operation, in application order.

pub mod batch;
pub mod move_codec;
pub mod move_node;
pub mod node_edit;

pub use batch::{transform_edit, x_transform};
pub use move_codec::{apply_boundary_convention, compose, decompose, reverse};
pub use move_node::transform_move_node;
pub use node_edit::{transform_node_edit, transform_path_only};

use crate::types::{Operation, Side, TransformError};

/// Transform `left` so it applies after `right`.
///
/// `side` breaks ties between symmetric conflicts and must be agreed on by
/// all replicas. Split and merge operations cannot be transformed as the
/// left operation.
pub fn transform(
    left: &Operation,
    right: &Operation,
    side: Side,
) -> Result<Vec<Operation>, TransformError> {
    match left {
        Operation::MoveNode { path, new_path } => {
            Ok(transform_move_node(path, new_path, right, side))
        }
        Operation::InsertNode { .. } | Operation::RemoveNode { .. } => {
            transform_node_edit(left, right, side)
        }
        Operation::SetNode { .. } | Operation::InsertText { .. } | Operation::RemoveText { .. } => {
            transform_path_only(left, right)
        }
        Operation::SplitNode { .. } | Operation::MergeNode { .. } => {
            Err(TransformError::Unsupported {
                left: left.kind(),
                right: right.kind(),
            })
        }
    }
}
