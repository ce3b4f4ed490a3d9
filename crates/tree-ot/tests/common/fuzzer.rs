//! Seeded generator of small trees and operations on them.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde_json::json;
use tree_ot::transform::compose;
use tree_ot::{path, Node, Operation, Path, Properties};

use super::tree::{Tree, TreeNode};

/// Uses xoshiro256** so every failing case can be replayed from its seed.
pub struct Fuzzer {
    pub seed: u64,
    rng: Xoshiro256StarStar,
    next_id: u64,
}

impl Fuzzer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }

    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..elements.len());
        &elements[idx]
    }

    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn random_node(&mut self, depth: usize) -> TreeNode {
        let id = self.fresh_id();
        if depth == 0 {
            return TreeNode::leaf(id);
        }
        let n = self.random_int(0, 3);
        let children = (0..n).map(|_| self.random_node(depth - 1)).collect();
        TreeNode::with(id, children)
    }

    /// A tree of depth up to three with at least one node under the root.
    pub fn random_tree(&mut self) -> Tree {
        let n = self.random_int(1, 4);
        let children = (0..n).map(|_| self.random_node(2)).collect();
        Tree::new(children)
    }

    pub fn random_insert(&mut self, tree: &Tree) -> Operation {
        let slots = tree.slots();
        let path = self.pick(&slots).clone();
        Operation::InsertNode {
            path,
            node: Node::Content(json!({ "id": self.fresh_id() })),
        }
    }

    pub fn random_remove(&mut self, tree: &Tree) -> Operation {
        let paths = tree.node_paths();
        let path = self.pick(&paths).clone();
        Operation::RemoveNode {
            path,
            node: Node::Placeholder,
        }
    }

    /// A valid move: a node plus a slot in the tree without that node.
    pub fn random_move(&mut self, tree: &Tree) -> Operation {
        let paths = tree.node_paths();
        let from = self.pick(&paths).clone();
        let mut without = tree.clone();
        without
            .apply(&Operation::remove_placeholder(from.clone()))
            .expect("source exists");
        let slots = without.slots();
        let to = self.pick(&slots).clone();
        compose(&from, &to)
    }

    /// A split of a random node; the new sibling gets a fresh id.
    pub fn random_split(&mut self, tree: &Tree) -> Operation {
        let paths = tree.node_paths();
        let path = self.pick(&paths).clone();
        let len = tree.get(&path).map_or(0, |n| n.children.len());
        let position = self.random_int(0, len);
        let mut properties = Properties::new();
        properties.insert("id".into(), json!(self.fresh_id()));
        Operation::SplitNode {
            path,
            position,
            properties,
        }
    }

    /// A merge of a random node into its predecessor, if any node has one.
    pub fn random_merge(&mut self, tree: &Tree) -> Option<Operation> {
        let paths: Vec<Path> = tree
            .node_paths()
            .into_iter()
            .filter(|p| p.last().is_some_and(|&i| i > 0))
            .collect();
        if paths.is_empty() {
            return None;
        }
        let path = self.pick(&paths).clone();
        let position = tree
            .get(&path::previous(&path))
            .map_or(0, |n| n.children.len());
        Some(Operation::MergeNode {
            path,
            position,
            properties: Properties::new(),
        })
    }
}
