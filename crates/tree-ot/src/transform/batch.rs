//! Batch conflict resolution for decomposed node edits.
//!
//! Moves are transformed by splitting them into a remove and an insert and
//! running every left edit against every right edit. An edit that lands in a
//! subtree the other side removed disappears, which shortens its group; the
//! callers in [`super::move_node`] interpret the shortened groups.

use crate::path;
use crate::types::{Operation, Side};

/// Transform one node edit against one already-applied node edit.
///
/// Returns `None` when `left` no longer has any effect. Only insert/remove
/// pairs are transformed; anything else passes through unchanged.
pub fn transform_edit(left: &Operation, right: &Operation, side: Side) -> Option<Operation> {
    match (left, right) {
        (Operation::InsertNode { path: lp, .. }, Operation::InsertNode { path: rp, .. }) => {
            if path::equals(lp, rp) && side == Side::Left {
                return Some(left.clone());
            }
            path::transform(lp, right).map(|p| left.with_path(p))
        }
        (Operation::InsertNode { path: lp, .. }, Operation::RemoveNode { path: rp, .. }) => {
            // The slot of a removed node is still a valid insertion point.
            if path::equals(lp, rp) {
                return Some(left.clone());
            }
            path::transform(lp, right).map(|p| left.with_path(p))
        }
        (
            Operation::RemoveNode { path: lp, .. },
            Operation::InsertNode { .. } | Operation::RemoveNode { .. },
        ) => path::transform(lp, right).map(|p| left.with_path(p)),
        _ => Some(left.clone()),
    }
}

/// Transform two groups of node edits against each other.
///
/// `left` is transformed so it applies after `right`, and `right` so it
/// applies after `left`. Both results may be shorter than their inputs.
pub fn x_transform(
    left: &[Operation],
    right: &[Operation],
    side: Side,
) -> (Vec<Operation>, Vec<Operation>) {
    let mut left = left.to_vec();
    let mut right_out = Vec::with_capacity(right.len());

    for r in right {
        let mut current = Some(r.clone());
        let mut next_left = Vec::with_capacity(left.len());

        for l in &left {
            match &current {
                Some(r_op) => {
                    if let Some(l_op) = transform_edit(l, r_op, side) {
                        next_left.push(l_op);
                    }
                    current = transform_edit(r_op, l, side.flip());
                }
                // The right edit was absorbed by an earlier left edit.
                None => next_left.push(l.clone()),
            }
        }

        left = next_left;
        if let Some(r_op) = current {
            right_out.push(r_op);
        }
    }

    (left, right_out)
}
