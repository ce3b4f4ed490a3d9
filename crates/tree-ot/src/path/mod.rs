//! Path algebra.
//!
//! Pure functions over child-index paths. Nothing here touches a tree: every
//! rule is expressed in terms of the paths of the edit being replayed and the
//! edit that was already applied.

use crate::types::{Operation, Path};

/// Returns true if two paths are element-wise equal.
pub fn equals(a: &[usize], b: &[usize]) -> bool {
    a == b
}

/// Returns true if `a` and `b` share a parent and differ in their last index.
pub fn is_sibling(a: &[usize], b: &[usize]) -> bool {
    if a.is_empty() || a.len() != b.len() {
        return false;
    }
    let last = a.len() - 1;
    a[..last] == b[..last] && a[last] != b[last]
}

/// Returns true if `parent` is a proper prefix of `path`.
pub fn is_ancestor(parent: &[usize], path: &[usize]) -> bool {
    parent.len() < path.len() && path.starts_with(parent)
}

/// Returns true if `parent` is the direct parent of `path`.
pub fn is_parent(parent: &[usize], path: &[usize]) -> bool {
    parent.len() + 1 == path.len() && path.starts_with(parent)
}

/// Returns true if `b`, read at the depth of `a`, is a later sibling of `a`.
///
/// `b` may be deeper than `a`: `[1]` ends before `[2, 0]`.
pub fn ends_before(a: &[usize], b: &[usize]) -> bool {
    let Some(last) = a.len().checked_sub(1) else {
        return false;
    };
    if b.len() <= last {
        return false;
    }
    a[..last] == b[..last] && a[last] < b[last]
}

/// The path of the following sibling.
pub fn next(path: &[usize]) -> Path {
    let mut p = path.to_vec();
    if let Some(last) = p.last_mut() {
        *last += 1;
    }
    p
}

/// The path of the preceding sibling. The last index must be positive.
pub fn previous(path: &[usize]) -> Path {
    let mut p = path.to_vec();
    if let Some(last) = p.last_mut() {
        debug_assert!(*last > 0, "previous() of a first child");
        *last = last.saturating_sub(1);
    }
    p
}

/// Where a moved node sits once `move_node{from, to}` has been applied.
pub fn true_path(from: &[usize], to: &[usize]) -> Path {
    let mut p = to.to_vec();
    if ends_before(from, to) && from.len() < to.len() {
        p[from.len() - 1] -= 1;
    }
    p
}

/// Transform `path` through an operation that has already been applied.
///
/// Returns `None` when the node at `path` no longer exists because `applied`
/// removed it or one of its ancestors.
pub fn transform(path: &[usize], applied: &Operation) -> Option<Path> {
    if path.is_empty() {
        return Some(Vec::new());
    }
    let mut p = path.to_vec();

    match applied {
        Operation::InsertNode { path: op, .. } => {
            if equals(op, &p) || ends_before(op, &p) || is_ancestor(op, &p) {
                p[op.len() - 1] += 1;
            }
        }
        Operation::RemoveNode { path: op, .. } => {
            if equals(op, &p) || is_ancestor(op, &p) {
                return None;
            }
            if ends_before(op, &p) {
                p[op.len() - 1] -= 1;
            }
        }
        Operation::MergeNode {
            path: op, position, ..
        } => {
            if equals(op, &p) || ends_before(op, &p) {
                p[op.len() - 1] -= 1;
            } else if is_ancestor(op, &p) {
                p[op.len() - 1] -= 1;
                p[op.len()] += position;
            }
        }
        Operation::SplitNode {
            path: op, position, ..
        } => {
            if equals(op, &p) {
                let last = p.len() - 1;
                p[last] += 1;
            } else if ends_before(op, &p) {
                p[op.len() - 1] += 1;
            } else if is_ancestor(op, &p) && path[op.len()] >= *position {
                p[op.len() - 1] += 1;
                p[op.len()] -= position;
            }
        }
        Operation::MoveNode {
            path: op,
            new_path: onp,
        } => {
            if equals(op, onp) {
                return Some(p);
            }
            if is_ancestor(op, &p) || equals(op, &p) {
                let mut moved = true_path(op, onp);
                moved.extend_from_slice(&p[op.len()..]);
                return Some(moved);
            }
            if is_sibling(op, onp) && (is_ancestor(onp, &p) || equals(onp, &p)) {
                if ends_before(op, &p) {
                    p[op.len() - 1] -= 1;
                } else {
                    p[op.len() - 1] += 1;
                }
            } else if ends_before(onp, &p) || equals(onp, &p) || is_ancestor(onp, &p) {
                if ends_before(op, &p) {
                    p[op.len() - 1] -= 1;
                }
                p[onp.len() - 1] += 1;
            } else if ends_before(op, &p) {
                p[op.len() - 1] -= 1;
            }
        }
        Operation::SetNode { .. }
        | Operation::InsertText { .. }
        | Operation::RemoveText { .. } => {}
    }

    Some(p)
}
