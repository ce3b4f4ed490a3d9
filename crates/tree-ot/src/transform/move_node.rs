//! Transform of a `move_node` against every other operation kind.
//!
//! Insert, remove and move rights are handled by decomposing the moves and
//! running [`x_transform`]; split and merge are corrected directly with path
//! arithmetic because they are not remove/insert pairs.

use tracing::{debug, warn};

use crate::path;
use crate::transform::batch::x_transform;
use crate::transform::move_codec::{compose, decompose, reverse};
use crate::types::{Operation, Path, Properties, Side};

/// Transform the move `from -> to` so it applies after `right`.
///
/// Returns the operations to apply instead of the move, in order. The list
/// is empty when the move became a no-op or lost its conflict, and holds at
/// most three operations of kinds move, remove and split.
pub fn transform_move_node(
    from: &[usize],
    to: &[usize],
    right: &Operation,
    side: Side,
) -> Vec<Operation> {
    if path::equals(from, to) {
        return Vec::new();
    }

    match right {
        Operation::InsertNode { .. } => against_insert(from, to, right, side),
        Operation::RemoveNode { .. } => against_remove(from, to, right, side),
        Operation::SplitNode { path: at, .. } => against_split(from, to, right, at),
        Operation::MergeNode {
            path: at,
            position,
            properties,
        } => against_merge(from, to, right, at, *position, properties),
        Operation::MoveNode {
            path: right_from,
            new_path: right_to,
        } => against_move(from, to, right_from, right_to, side),
        Operation::SetNode { .. } | Operation::InsertText { .. } | Operation::RemoveText { .. } => {
            vec![move_node(from.to_vec(), to.to_vec())]
        }
    }
}

fn move_node(path: Path, new_path: Path) -> Operation {
    Operation::MoveNode { path, new_path }
}

/// Recompose a surviving remove/insert pair.
fn recompose(group: &[Operation]) -> Option<Operation> {
    match group {
        [Operation::RemoveNode { path: from, .. }, Operation::InsertNode { path: to, .. }] => {
            Some(compose(from, to))
        }
        _ => None,
    }
}

/// Path through an edit that cannot delete it (split, merge, move).
fn rebase(p: &[usize], applied: &Operation) -> Path {
    path::transform(p, applied).unwrap_or_else(|| p.to_vec())
}

/// Re-root `p` under `base`, dropping its first `trim` components.
fn reroot(base: &[usize], p: &[usize], trim: usize) -> Path {
    let mut out = base.to_vec();
    out.extend_from_slice(p.get(trim..).unwrap_or(&[]));
    out
}

// ── Right = insert / remove ───────────────────────────────────────────────

fn against_insert(from: &[usize], to: &[usize], right: &Operation, side: Side) -> Vec<Operation> {
    let (lr, li) = decompose(from, to);
    let (l, _) = x_transform(&[lr, li], std::slice::from_ref(right), side);
    recompose(&l).into_iter().collect()
}

fn against_remove(from: &[usize], to: &[usize], right: &Operation, side: Side) -> Vec<Operation> {
    let (lr, li) = decompose(from, to);
    let (l, _) = x_transform(&[lr, li], std::slice::from_ref(right), side);

    if let Some(op) = recompose(&l) {
        return vec![op];
    }
    match l.as_slice() {
        // The destination was removed: the moved subtree goes with it.
        [remove @ Operation::RemoveNode { .. }] => {
            debug!(
                ?from,
                ?to,
                removed = ?right.path(),
                "move destination removed, removing source"
            );
            vec![remove.clone()]
        }
        // The source was removed: nothing is re-inserted at the destination.
        [Operation::InsertNode { .. }] => {
            warn!(
                ?from,
                ?to,
                removed = ?right.path(),
                "move source removed concurrently, dropping move"
            );
            Vec::new()
        }
        _ => Vec::new(),
    }
}

// ── Right = split ─────────────────────────────────────────────────────────

fn against_split(from: &[usize], to: &[usize], right: &Operation, at: &[usize]) -> Vec<Operation> {
    let after = path::is_sibling(from, to) && path::ends_before(from, to);

    // Both halves of the split node have to move.
    if path::equals(from, at) {
        let new_path = rebase(to, right);
        if after {
            return vec![
                move_node(from.to_vec(), new_path.clone()),
                move_node(from.to_vec(), new_path),
            ];
        }
        let second_half = move_node(path::next(from), new_path.clone());
        let first_half = move_node(
            rebase(from, &second_half),
            path::previous(&rebase(&new_path, &second_half)),
        );
        return vec![second_half, first_half];
    }

    let mut new_path = rebase(to, right);
    if path::equals(&new_path, &path::next(at)) && !after {
        // landed between the two halves; keep it in front of both
        new_path = at.to_vec();
    } else if after && !path::is_sibling(&rebase(from, right), &new_path) {
        // the split broke the sibling relation, "after" became "before"
        new_path = path::next(&new_path);
    }

    vec![move_node(rebase(from, right), new_path)]
}

// ── Right = merge ─────────────────────────────────────────────────────────

fn against_merge(
    from: &[usize],
    to: &[usize],
    right: &Operation,
    at: &[usize],
    position: usize,
    properties: &Properties,
) -> Vec<Operation> {
    let left = move_node(from.to_vec(), to.to_vec());
    let merged = rebase(at, &left);
    let target = rebase(&path::previous(at), &left);

    // The move separated the merged node from its predecessor. Undo the
    // merge, replay the move and drop the half that cannot keep its
    // properties.
    if !path::equals(&merged, &path::next(&target)) {
        warn!(
            ?from,
            ?to,
            merge = ?at,
            "move conflicts with merge, splitting back and removing merged node"
        );
        return vec![
            Operation::SplitNode {
                path: path::previous(at),
                position,
                properties: properties.clone(),
            },
            left,
            Operation::remove_placeholder(merged),
        ];
    }

    // From a child of the predecessor to a child of the merged node: after
    // the merge both are siblings and the destination reads as "after".
    if path::is_parent(&path::previous(at), from) && path::is_parent(at, to) {
        return vec![move_node(
            rebase(from, right),
            path::previous(&rebase(to, right)),
        )];
    }

    vec![move_node(rebase(from, right), rebase(to, right))]
}

// ── Right = move ──────────────────────────────────────────────────────────

fn against_move(
    from: &[usize],
    to: &[usize],
    right_from: &[usize],
    right_to: &[usize],
    side: Side,
) -> Vec<Operation> {
    let left = move_node(from.to_vec(), to.to_vec());
    if path::equals(right_from, right_to) {
        return vec![left];
    }

    let (lr, li) = decompose(from, to);
    let (rr, ri) = decompose(right_from, right_to);
    let (l, r) = x_transform(&[lr.clone(), li.clone()], &[rr.clone(), ri.clone()], side);

    if let Some(op) = recompose(&l) {
        return vec![op];
    }

    // Both moves claim the same node.
    if r.len() == 1 {
        debug!(?from, ?to, ?right_from, ?right_to, ?side, "conflicting moves");
        return match side {
            Side::Left => vec![reverse(rr.path(), ri.path()), left],
            Side::Right => Vec::new(),
        };
    }

    let trim = rr.path().len();
    let (remove_path, insert_path) = match (l.as_slice(), r.as_slice()) {
        // The left move happens entirely inside the subtree the right move carried.
        ([], _) => (reroot(ri.path(), lr.path(), trim), reroot(ri.path(), li.path(), trim)),
        // Only the destination was carried away.
        ([Operation::RemoveNode { path, .. }], [moved_from, moved_to]) => (
            path.clone(),
            reroot(moved_to.path(), li.path(), moved_from.path().len()),
        ),
        // Only the source was carried away.
        ([Operation::InsertNode { path, .. }], _) => {
            (reroot(ri.path(), lr.path(), trim), path.clone())
        }
        _ => {
            warn!(
                ?from,
                ?to,
                ?right_from,
                ?right_to,
                "unexpected collapse of concurrent moves, keeping move untransformed"
            );
            return vec![left];
        }
    };

    vec![compose(&remove_path, &insert_path)]
}
