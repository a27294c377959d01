//! `U1`/`U2`/`U4`/`U8` array items.

use crate::ast::{is_valid_var_name, variable_names, ItemError, ItemNode};
use crate::codec::{self, FormatCode, MAX_BYTE_SIZE};
use crate::value::ItemValue;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Immutable unsigned-integer array item.
///
/// Invariants, checked on every construction:
/// - `byte_width` is 1, 2, 4 or 8, and every value fits in it;
/// - a variable's position holds 0 and is otherwise unused;
/// - variable names follow [`is_valid_var_name`];
/// - variable positions are unique and in `0..values.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UintNode {
    format: FormatCode,
    values: Vec<u64>,
    variables: HashMap<String, usize>,
}

impl UintNode {
    /// Build a node from integers (any width or signedness, reinterpreted as unsigned
    /// bits) and [`ItemValue::Variable`] placeholders.
    pub fn new<I>(byte_width: usize, inputs: I) -> Result<Self, ItemError>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: Into<ItemValue>,
    {
        let inputs = inputs.into_iter();
        if let Some(format) = FormatCode::unsigned(byte_width) {
            let length = codec::data_byte_length(format, inputs.len());
            if length > MAX_BYTE_SIZE {
                return Err(ItemError::SizeLimitExceeded {
                    length,
                    max: MAX_BYTE_SIZE,
                });
            }
        }

        let mut values = Vec::with_capacity(inputs.len());
        let mut variables = HashMap::new();
        for (i, input) in inputs.map(Into::<ItemValue>::into).enumerate() {
            if let Some(bits) = input.as_u64_bits() {
                values.push(bits);
                continue;
            }
            match input {
                ItemValue::Variable(name) => {
                    values.push(0);
                    variables.insert(name, i);
                }
                other => {
                    return Err(ItemError::InvalidInputType {
                        position: i,
                        kind: other.kind(),
                    })
                }
            }
        }

        Self::from_parts(byte_width, values, variables)
    }

    /// Node with no elements.
    pub fn empty(byte_width: usize) -> Result<Self, ItemError> {
        Self::new(byte_width, Vec::<ItemValue>::new())
    }

    fn from_parts(
        byte_width: usize,
        values: Vec<u64>,
        variables: HashMap<String, usize>,
    ) -> Result<Self, ItemError> {
        let format =
            FormatCode::unsigned(byte_width).ok_or(ItemError::InvalidByteWidth(byte_width))?;
        let node = UintNode {
            format,
            values,
            variables,
        };
        node.check_rep()?;
        Ok(node)
    }

    pub fn byte_width(&self) -> usize {
        self.format.element_size()
    }

    /// Raw values; variable positions read as 0.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// `U1`, `U2`, `U4` or `U8`.
    pub fn format_code(&self) -> FormatCode {
        self.format
    }

    /// Position of a variable, if present.
    pub fn variable_position(&self, name: &str) -> Option<usize> {
        self.variables.get(name).copied()
    }

    /// Like [`ItemNode::to_bytes`] but reports why no encoding is possible.
    pub fn try_to_bytes(&self) -> Result<Vec<u8>, ItemError> {
        if !self.variables.is_empty() {
            return Err(ItemError::UnresolvedVariables(variable_names(&self.variables)));
        }
        let mut out = codec::encode_header(self.format, self.size())?;
        codec::write_be_fields(&mut out, &self.values, self.byte_width());
        Ok(out)
    }

    fn max_value(&self) -> u64 {
        let width = self.byte_width();
        if width >= 8 {
            u64::MAX
        } else {
            (1u64 << (width * 8)) - 1
        }
    }

    /// Width is checked by `from_parts` when it resolves the format code.
    fn check_rep(&self) -> Result<(), ItemError> {
        let max = self.max_value();
        for (position, &value) in self.values.iter().enumerate() {
            if value > max {
                return Err(ItemError::ValueOverflow {
                    position,
                    value,
                    max,
                });
            }
        }

        let mut visited = HashSet::new();
        for (name, &position) in &self.variables {
            if position >= self.values.len() {
                return Err(ItemError::PlaceholderPositionOutOfRange {
                    name: name.clone(),
                    position,
                    size: self.values.len(),
                });
            }
            if self.values[position] != 0 {
                return Err(ItemError::PlaceholderNotZero {
                    name: name.clone(),
                    position,
                });
            }
            if !is_valid_var_name(name) {
                return Err(ItemError::InvalidVariableName(name.clone()));
            }
            if !visited.insert(position) {
                return Err(ItemError::DuplicatePlaceholderPosition { position });
            }
        }
        Ok(())
    }
}

impl ItemNode for UintNode {
    fn size(&self) -> usize {
        self.values.len()
    }

    fn variables(&self) -> Vec<String> {
        variable_names(&self.variables)
    }

    fn fill_values(&self, values: &HashMap<String, ItemValue>) -> Result<Self, ItemError> {
        let mut inputs: Vec<ItemValue> = self.values.iter().map(|&v| ItemValue::U64(v)).collect();
        let mut filled = 0usize;
        for (name, &position) in &self.variables {
            inputs[position] = match values.get(name) {
                Some(v) => {
                    filled += 1;
                    v.clone()
                }
                None => ItemValue::Variable(name.clone()),
            };
        }
        tracing::trace!(
            format = self.format.tag(),
            filled,
            remaining = self.variables.len() - filled,
            "fill uint item"
        );
        UintNode::new(self.byte_width(), inputs)
    }

    fn fill_boxed(
        &self,
        values: &HashMap<String, ItemValue>,
    ) -> Result<Box<dyn ItemNode>, ItemError> {
        Ok(Box::new(self.fill_values(values)?))
    }

    fn to_bytes(&self) -> Vec<u8> {
        match self.try_to_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(item = %self, error = %e, "uint item not encodable");
                Vec::new()
            }
        }
    }
}

impl fmt::Display for UintNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<U{}[{}]", self.byte_width(), self.values.len())?;
        let mut names: Vec<Option<&str>> = vec![None; self.values.len()];
        for (name, &position) in &self.variables {
            if let Some(slot) = names.get_mut(position) {
                *slot = Some(name);
            }
        }
        for (value, name) in self.values.iter().zip(names) {
            match name {
                Some(name) => write!(f, " {}", name)?,
                None => write!(f, " {}", value)?,
            }
        }
        write!(f, ">")
    }
}
