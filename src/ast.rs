//! Abstract Syntax Tree for SECS-II data items.
//!
//! Every item variant (`U1`..`U8` arrays here; text, boolean, binary, list, signed and
//! float items elsewhere) implements [`ItemNode`], so message-level code can hold
//! heterogeneous items as `Box<dyn ItemNode>`.

use crate::value::ItemValue;
use std::collections::HashMap;
use std::fmt;

/// Errors raised while building, filling or encoding an item node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("item node size limit exceeded: {length} bytes (max {max})")]
    SizeLimitExceeded { length: usize, max: usize },
    #[error("input {position} has invalid type {kind} for this item")]
    InvalidInputType { position: usize, kind: &'static str },
    #[error("invalid byte width: {0}")]
    InvalidByteWidth(usize),
    #[error("value overflow at {position}: {value} > {max}")]
    ValueOverflow { position: usize, value: u64, max: u64 },
    #[error("value in variable position isn't a zero-value: {name} at {position}")]
    PlaceholderNotZero { name: String, position: usize },
    #[error("invalid variable name: {0:?}")]
    InvalidVariableName(String),
    #[error("variable position is not unique: {position}")]
    DuplicatePlaceholderPosition { position: usize },
    #[error("variable position overflow: {name} at {position} (size {size})")]
    PlaceholderPositionOutOfRange {
        name: String,
        position: usize,
        size: usize,
    },
    #[error("unresolved variables: {}", .0.join(", "))]
    UnresolvedVariables(Vec<String>),
    #[error("Syntax: {0}")]
    Syntax(String),
}

/// Capabilities shared by every data item node.
pub trait ItemNode: fmt::Display + fmt::Debug {
    /// Number of elements in the item.
    fn size(&self) -> usize;

    /// Names of the unresolved placeholders. Treat as an unordered set.
    fn variables(&self) -> Vec<String>;

    /// Return a new node with the placeholders found in `values` replaced.
    /// Placeholders missing from `values` stay unresolved.
    fn fill_values(&self, values: &HashMap<String, ItemValue>) -> Result<Self, ItemError>
    where
        Self: Sized;

    /// Same as [`fill_values`](ItemNode::fill_values), callable on `dyn ItemNode`.
    fn fill_boxed(
        &self,
        values: &HashMap<String, ItemValue>,
    ) -> Result<Box<dyn ItemNode>, ItemError>;

    /// Wire encoding: item header followed by payload. Empty while any placeholder
    /// remains unresolved.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Variable naming rule: an ASCII letter or `_`, then ASCII letters, digits or `_`.
pub fn is_valid_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Names of a variable map, sorted so output is stable.
pub(crate) fn variable_names(variables: &HashMap<String, usize>) -> Vec<String> {
    let mut names: Vec<String> = variables.keys().cloned().collect();
    names.sort();
    names
}
