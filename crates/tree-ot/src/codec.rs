//! JSON codec for operations.
//!
//! Operations are exchanged as Slate-style records:
//!
//! ```json
//! {"type": "move_node", "path": [0, 1], "newPath": [2]}
//! {"type": "split_node", "path": [1], "position": 3, "properties": {"type": "paragraph"}}
//! {"type": "remove_node", "path": [4], "node": null}
//! ```
//!
//! A `null` node is the placeholder payload of synthetic edits.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::types::Operation;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid operation: {0}")]
    InvalidOp(#[from] serde_json::Error),
    #[error("operations must be an array")]
    NotAnArray,
}

/// Serialize an operation to a JSON value.
pub fn to_json(op: &Operation) -> Result<Value, CodecError> {
    Ok(serde_json::to_value(op)?)
}

/// Deserialize an operation from a JSON value.
pub fn from_json(v: &Value) -> Result<Operation, CodecError> {
    Ok(Operation::deserialize(v)?)
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_ops(ops: &[Operation]) -> Result<Value, CodecError> {
    ops.iter()
        .map(to_json)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

/// Deserialize a JSON array into a list of operations.
pub fn from_json_ops(v: &Value) -> Result<Vec<Operation>, CodecError> {
    let arr = v.as_array().ok_or(CodecError::NotAnArray)?;
    arr.iter().map(from_json).collect()
}

/// Parse a single operation from JSON text.
pub fn from_str(s: &str) -> Result<Operation, CodecError> {
    Ok(serde_json::from_str(s)?)
}
