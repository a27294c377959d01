//! Loosely typed values accepted when building or filling item nodes.

/// A single input for an item node: a concrete scalar, raw data, or a placeholder.
///
/// Item constructors accept a sequence of these and reject the kinds they cannot
/// hold with [`ItemError::InvalidInputType`](crate::ast::ItemError::InvalidInputType).
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Bool(bool),
    Float(f32),
    Double(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// Named placeholder, resolved later by `fill_values`.
    Variable(String),
}

impl ItemValue {
    /// Shorthand for [`ItemValue::Variable`].
    pub fn var(name: impl Into<String>) -> Self {
        ItemValue::Variable(name.into())
    }

    /// Unsigned bit pattern of any integer variant. Signed values are sign-extended,
    /// so `I8(-1)` yields `u64::MAX`.
    pub fn as_u64_bits(&self) -> Option<u64> {
        match self {
            ItemValue::U8(x) => Some(*x as u64),
            ItemValue::U16(x) => Some(*x as u64),
            ItemValue::U32(x) => Some(*x as u64),
            ItemValue::U64(x) => Some(*x),
            ItemValue::I8(x) => Some(*x as u64),
            ItemValue::I16(x) => Some(*x as u64),
            ItemValue::I32(x) => Some(*x as u64),
            ItemValue::I64(x) => Some(*x as u64),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ItemValue::U8(_) => "u8",
            ItemValue::U16(_) => "u16",
            ItemValue::U32(_) => "u32",
            ItemValue::U64(_) => "u64",
            ItemValue::I8(_) => "i8",
            ItemValue::I16(_) => "i16",
            ItemValue::I32(_) => "i32",
            ItemValue::I64(_) => "i64",
            ItemValue::Bool(_) => "bool",
            ItemValue::Float(_) => "float",
            ItemValue::Double(_) => "double",
            ItemValue::Text(_) => "text",
            ItemValue::Bytes(_) => "bytes",
            ItemValue::Variable(_) => "variable",
        }
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for ItemValue {
                fn from(x: $t) -> Self {
                    ItemValue::$variant(x)
                }
            }
        )*
    };
}

impl_from_scalar! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    bool => Bool,
    f32 => Float,
    f64 => Double,
    Vec<u8> => Bytes,
}

/// String slices become placeholders; use [`ItemValue::Text`] for ASCII data.
impl From<&str> for ItemValue {
    fn from(name: &str) -> Self {
        ItemValue::Variable(name.to_string())
    }
}

impl From<String> for ItemValue {
    fn from(name: String) -> Self {
        ItemValue::Variable(name)
    }
}

impl From<usize> for ItemValue {
    fn from(x: usize) -> Self {
        ItemValue::U64(x as u64)
    }
}

impl From<isize> for ItemValue {
    fn from(x: isize) -> Self {
        ItemValue::I64(x as i64)
    }
}
