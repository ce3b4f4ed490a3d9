//! Core types: operations, payloads, tie-break side and errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A root-relative sequence of child indices.
pub type Path = Vec<usize>;

/// Node properties carried by split, merge and set operations.
pub type Properties = Map<String, Value>;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("cannot transform {left} against {right}")]
    Unsupported { left: OpKind, right: OpKind },
}

// ── Node payload ──────────────────────────────────────────────────────────

/// Payload of an inserted or removed node.
///
/// Synthetic edits produced while transforming never hold real content and
/// carry [`Node::Placeholder`] instead. On the wire the placeholder is `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    #[default]
    Placeholder,
    Content(Value),
}

impl Node {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Node::Placeholder)
    }
}

// ── Side ──────────────────────────────────────────────────────────────────

/// Replica-agreed tie-break for symmetric conflicts.
///
/// `Left` keeps the effect of the operation being transformed, `Right` keeps
/// the effect of the operation that was already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// ── Operation kind ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    InsertNode,
    RemoveNode,
    SplitNode,
    MergeNode,
    MoveNode,
    SetNode,
    InsertText,
    RemoveText,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::InsertNode => "insert_node",
            OpKind::RemoveNode => "remove_node",
            OpKind::SplitNode => "split_node",
            OpKind::MergeNode => "merge_node",
            OpKind::MoveNode => "move_node",
            OpKind::SetNode => "set_node",
            OpKind::InsertText => "insert_text",
            OpKind::RemoveText => "remove_text",
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Operation enum ────────────────────────────────────────────────────────

/// A single edit on an ordered tree.
///
/// Only `path`-like fields matter to the transform. The JSON shape follows
/// the Slate operation records: `{"type": "move_node", "path": [..],
/// "newPath": [..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    InsertNode {
        path: Path,
        #[serde(default)]
        node: Node,
    },
    RemoveNode {
        path: Path,
        #[serde(default)]
        node: Node,
    },
    /// Splits the node at `path`; children from `position` on move into a
    /// new sibling at `next(path)` carrying `properties`.
    SplitNode {
        path: Path,
        position: usize,
        #[serde(default)]
        properties: Properties,
    },
    /// Merges the node at `path` into its predecessor, which held
    /// `position` children before the merge.
    MergeNode {
        path: Path,
        position: usize,
        #[serde(default)]
        properties: Properties,
    },
    MoveNode {
        path: Path,
        #[serde(rename = "newPath")]
        new_path: Path,
    },
    SetNode {
        path: Path,
        #[serde(default)]
        properties: Properties,
        #[serde(default, rename = "newProperties")]
        new_properties: Properties,
    },
    InsertText {
        path: Path,
        offset: usize,
        text: String,
    },
    RemoveText {
        path: Path,
        offset: usize,
        text: String,
    },
}

impl Operation {
    pub fn kind(&self) -> OpKind {
        match self {
            Operation::InsertNode { .. } => OpKind::InsertNode,
            Operation::RemoveNode { .. } => OpKind::RemoveNode,
            Operation::SplitNode { .. } => OpKind::SplitNode,
            Operation::MergeNode { .. } => OpKind::MergeNode,
            Operation::MoveNode { .. } => OpKind::MoveNode,
            Operation::SetNode { .. } => OpKind::SetNode,
            Operation::InsertText { .. } => OpKind::InsertText,
            Operation::RemoveText { .. } => OpKind::RemoveText,
        }
    }

    /// The primary path of the operation (the source path for moves).
    pub fn path(&self) -> &Path {
        match self {
            Operation::InsertNode { path, .. }
            | Operation::RemoveNode { path, .. }
            | Operation::SplitNode { path, .. }
            | Operation::MergeNode { path, .. }
            | Operation::MoveNode { path, .. }
            | Operation::SetNode { path, .. }
            | Operation::InsertText { path, .. }
            | Operation::RemoveText { path, .. } => path,
        }
    }

    /// Rebuild the operation with a different primary `path`, keeping all
    /// other fields intact.
    pub fn with_path(&self, new_path: Path) -> Operation {
        let mut op = self.clone();
        match &mut op {
            Operation::InsertNode { path, .. }
            | Operation::RemoveNode { path, .. }
            | Operation::SplitNode { path, .. }
            | Operation::MergeNode { path, .. }
            | Operation::MoveNode { path, .. }
            | Operation::SetNode { path, .. }
            | Operation::InsertText { path, .. }
            | Operation::RemoveText { path, .. } => *path = new_path,
        }
        op
    }

    /// Synthetic removal with a placeholder payload.
    pub fn remove_placeholder(path: Path) -> Operation {
        Operation::RemoveNode {
            path,
            node: Node::Placeholder,
        }
    }

    /// Synthetic insertion with a placeholder payload.
    pub fn insert_placeholder(path: Path) -> Operation {
        Operation::InsertNode {
            path,
            node: Node::Placeholder,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(
            self,
            Operation::SetNode { .. } | Operation::InsertText { .. } | Operation::RemoveText { .. }
        )
    }
}
