//! Move decomposition.
//!
//! A `move_node{path, newPath}` is equivalent to removing the node at `path`
//! and inserting it at its true path. The insert leg is stored in
//! "after removal" coordinates, so recomposing it has to re-derive the
//! before/after reading of `newPath`.

use crate::path;
use crate::types::{Operation, Path};

/// Split a move into its remove and insert legs (placeholder payloads).
pub fn decompose(from: &[usize], to: &[usize]) -> (Operation, Operation) {
    (
        Operation::remove_placeholder(from.to_vec()),
        Operation::insert_placeholder(path::true_path(from, to)),
    )
}

/// Rebuild a move from a remove leg and an insert leg.
pub fn compose(remove_path: &[usize], insert_path: &[usize]) -> Operation {
    let candidate = shift_for_insert(insert_path, remove_path);
    Operation::MoveNode {
        path: remove_path.to_vec(),
        new_path: apply_boundary_convention(remove_path, candidate),
    }
}

/// The move that undoes a decomposed move.
pub fn reverse(remove_path: &[usize], insert_path: &[usize]) -> Operation {
    let candidate = shift_for_insert(remove_path, insert_path);
    Operation::MoveNode {
        path: insert_path.to_vec(),
        new_path: apply_boundary_convention(insert_path, candidate),
    }
}

/// Turn a "before" destination into the `newPath` a move has to carry.
///
/// When source and destination are siblings and the source comes first,
/// `newPath` is read as "after", so the destination steps back by one.
pub fn apply_boundary_convention(source: &[usize], candidate: Path) -> Path {
    if path::is_sibling(source, &candidate) && path::ends_before(source, &candidate) {
        return path::previous(&candidate);
    }
    candidate
}

/// `target` re-read after a node was inserted at `inserted_at`.
fn shift_for_insert(target: &[usize], inserted_at: &[usize]) -> Path {
    // insertions never remove a path
    path::transform(target, &Operation::insert_placeholder(inserted_at.to_vec()))
        .unwrap_or_else(|| target.to_vec())
}
