//! Minimal ordered tree applying operations with Slate semantics.

use serde_json::Value;
use tree_ot::{Node, Operation, Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: u64,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(id: u64) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    pub fn with(id: u64, children: Vec<TreeNode>) -> Self {
        Self { id, children }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub root: TreeNode,
}

fn id_of(v: &Value) -> Result<u64, String> {
    v.get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| format!("node without id: {v}"))
}

impl Tree {
    pub fn new(children: Vec<TreeNode>) -> Self {
        Self {
            root: TreeNode::with(0, children),
        }
    }

    pub fn get(&self, path: &[usize]) -> Option<&TreeNode> {
        let mut cur = &self.root;
        for &i in path {
            cur = cur.children.get(i)?;
        }
        Some(cur)
    }

    fn get_mut(&mut self, path: &[usize]) -> Option<&mut TreeNode> {
        let mut cur = &mut self.root;
        for &i in path {
            cur = cur.children.get_mut(i)?;
        }
        Some(cur)
    }

    fn siblings_mut(&mut self, path: &[usize]) -> Result<(&mut Vec<TreeNode>, usize), String> {
        let (last, parent) = path.split_last().ok_or("root has no siblings")?;
        let parent = self
            .get_mut(parent)
            .ok_or_else(|| format!("no parent for {path:?}"))?;
        Ok((&mut parent.children, *last))
    }

    fn remove_at(&mut self, path: &[usize]) -> Result<TreeNode, String> {
        let (children, idx) = self.siblings_mut(path)?;
        if idx >= children.len() {
            return Err(format!("remove out of range at {path:?}"));
        }
        Ok(children.remove(idx))
    }

    fn insert_at(&mut self, path: &[usize], node: TreeNode) -> Result<(), String> {
        let (children, idx) = self.siblings_mut(path)?;
        if idx > children.len() {
            return Err(format!("insert out of range at {path:?}"));
        }
        children.insert(idx, node);
        Ok(())
    }

    pub fn apply(&mut self, op: &Operation) -> Result<(), String> {
        match op {
            Operation::InsertNode { path, node } => match node {
                Node::Content(v) => self.insert_at(path, TreeNode::leaf(id_of(v)?)),
                Node::Placeholder => Err(format!("placeholder insert at {path:?}")),
            },
            Operation::RemoveNode { path, .. } => self.remove_at(path).map(|_| ()),
            Operation::MoveNode { path, new_path } => {
                if path == new_path {
                    return Ok(());
                }
                let node = self.remove_at(path)?;
                // where the node lands once it is out of the way
                let mut target = new_path.clone();
                let depth = path.len() - 1;
                if new_path.len() > path.len()
                    && new_path[..depth] == path[..depth]
                    && path[depth] < new_path[depth]
                {
                    target[depth] -= 1;
                }
                self.insert_at(&target, node)
            }
            Operation::SplitNode {
                path,
                position,
                properties,
            } => {
                let id = properties
                    .get("id")
                    .and_then(Value::as_u64)
                    .ok_or("split without id")?;
                let node = self.get_mut(path).ok_or_else(|| format!("no node at {path:?}"))?;
                if *position > node.children.len() {
                    return Err(format!("split position out of range at {path:?}"));
                }
                let tail = node.children.split_off(*position);
                let mut next = path.clone();
                *next.last_mut().ok_or("cannot split root")? += 1;
                self.insert_at(&next, TreeNode::with(id, tail))
            }
            Operation::MergeNode { path, .. } => {
                let node = self.remove_at(path)?;
                let mut prev = path.clone();
                let last = prev.last_mut().ok_or("cannot merge root")?;
                *last = last.checked_sub(1).ok_or("merge without predecessor")?;
                let target = self.get_mut(&prev).ok_or("no predecessor")?;
                target.children.extend(node.children);
                Ok(())
            }
            Operation::SetNode { .. }
            | Operation::InsertText { .. }
            | Operation::RemoveText { .. } => Ok(()),
        }
    }

    pub fn apply_all(&mut self, ops: &[Operation]) -> Result<(), String> {
        ops.iter().try_for_each(|op| self.apply(op))
    }

    /// Paths of every node except the root.
    pub fn node_paths(&self) -> Vec<Path> {
        let mut out = Vec::new();
        collect_paths(&self.root, &mut Vec::new(), &mut out);
        out
    }

    /// Every position a node could be inserted at.
    pub fn slots(&self) -> Vec<Path> {
        let mut out: Vec<Path> = (0..=self.root.children.len()).map(|i| vec![i]).collect();
        for p in self.node_paths() {
            let node = self.get(&p).map(|n| n.children.len()).unwrap_or(0);
            for i in 0..=node {
                let mut slot = p.clone();
                slot.push(i);
                out.push(slot);
            }
        }
        out
    }
}

fn collect_paths(node: &TreeNode, prefix: &mut Path, out: &mut Vec<Path>) {
    for (i, child) in node.children.iter().enumerate() {
        prefix.push(i);
        out.push(prefix.clone());
        collect_paths(child, prefix, out);
        prefix.pop();
    }
}
