//! tree-ot: operational transformation for ordered trees.
//!
//! Rewrites structural edits (insert, remove, split, merge and, above all,
//! move) so they can be replayed after a concurrent edit that a replica has
//! already applied. Every replica that applies the same edits, each
//! transformed against whatever was applied first, ends in the same tree.
//!
//! # Example
//!
//! ```
//! use tree_ot::{transform, Operation, Side};
//!
//! // Children [a, b, c]: move c in front of a, while a is removed elsewhere.
//! let left = Operation::MoveNode { path: vec![2], new_path: vec![0] };
//! let right = Operation::remove_placeholder(vec![0]);
//!
//! let out = transform(&left, &right, Side::Left).unwrap();
//! assert_eq!(out, vec![Operation::MoveNode { path: vec![1], new_path: vec![0] }]);
//! ```
//!
//! # Modules
//!
//! - [`path`]: path algebra and path transformation
//! - [`transform`]: move codec, batch resolver and the transforms
//! - [`codec`]: JSON records for operations
//! - [`validate`]: checks on transform results

pub mod types;
pub mod path;
pub mod transform;
pub mod codec;
pub mod validate;

pub use types::{Node, OpKind, Operation, Path, Properties, Side, TransformError};
pub use transform::{transform, transform_move_node};
pub use codec::{from_json, from_json_ops, to_json, to_json_ops, CodecError};
pub use validate::{check_move_result, check_no_placeholder_insert, ValidationError};
