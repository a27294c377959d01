//! # secs2ast — SECS-II data item nodes
//!
//! Immutable AST nodes for the data items of SECS-II equipment-communication
//! messages, with support for message templates: an item may hold named
//! placeholders (variables) that are filled in later.
//!
//! ## Unsigned-integer items
//!
//! [`UintNode`] models `U1`, `U2`, `U4` and `U8` arrays. Each element is either a
//! concrete value or a placeholder:
//!
//! ```
//! use secs2ast::{ItemNode, ItemValue, UintNode};
//! use std::collections::HashMap;
//!
//! let node = UintNode::new(4, vec![ItemValue::var("X"), ItemValue::U32(10)]).unwrap();
//! assert_eq!(node.to_string(), "<U4[2] X 10>");
//! assert!(node.to_bytes().is_empty()); // X unresolved
//!
//! let filled = node
//!     .fill_values(&HashMap::from([("X".to_string(), ItemValue::U32(99))]))
//!     .unwrap();
//! assert_eq!(filled.to_bytes(), vec![0xB1, 0x08, 0, 0, 0, 99, 0, 0, 0, 10]);
//! ```
//!
//! ## Wire format
//!
//! `[format|n][length: n bytes][data]`; see [`codec`] for the header layout.
//! Values are written big-endian in exactly `byte_width` bytes each.
//!
//! ## Text form
//!
//! `Display` renders `<U{width}[{count}] v1 v2 ...>`; [`parse_uint`] reads it back.

pub mod ast;
pub mod codec;
pub mod parser;
pub mod uint;
pub mod value;

pub use ast::{is_valid_var_name, ItemError, ItemNode};
pub use codec::{encode_header, FormatCode, MAX_BYTE_SIZE};
pub use parser::parse_uint;
pub use uint::UintNode;
pub use value::ItemValue;
