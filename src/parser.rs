//! Parse the textual item form (`<U4[2] X 10>`) into item nodes using PEST.

use crate::ast::ItemError;
use crate::uint::UintNode;
use crate::value::ItemValue;
use pest::Parser;
use pest_derive::Parser as PestParser;

#[derive(PestParser)]
#[grammar = "item.pest"]
struct ItemParser;

/// Parse an unsigned-integer item, e.g. `<U1 1 2>` or `<U4[2] X 10>`.
///
/// The optional `[n]` count must match the number of elements. Identifiers become
/// placeholders. The node goes through [`UintNode::new`], so all invariants apply.
pub fn parse_uint(source: &str) -> Result<UintNode, ItemError> {
    let pairs = ItemParser::parse(Rule::uint_item, source)
        .map_err(|e| ItemError::Syntax(format!("Parse error: {}", e)))?;
    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| ItemError::Syntax("Empty parse".to_string()))?;

    let mut byte_width = None;
    let mut declared_count = None;
    let mut inputs = Vec::new();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::uint_type => {
                let digits = &inner.as_str()[1..];
                let w = digits
                    .parse::<usize>()
                    .map_err(|_| ItemError::Syntax(format!("bad item type: {}", inner.as_str())))?;
                byte_width = Some(w);
            }
            Rule::count => {
                let text = inner.into_inner().as_str();
                let n = text
                    .parse::<usize>()
                    .map_err(|_| ItemError::Syntax(format!("bad item count: {}", text)))?;
                declared_count = Some(n);
            }
            Rule::number => inputs.push(ItemValue::U64(parse_number(inner.as_str())?)),
            Rule::ident => inputs.push(ItemValue::var(inner.as_str())),
            _ => {}
        }
    }

    let byte_width = byte_width.ok_or_else(|| ItemError::Syntax("missing item type".to_string()))?;
    if let Some(n) = declared_count {
        if n != inputs.len() {
            return Err(ItemError::Syntax(format!(
                "item count mismatch: declared {}, found {}",
                n,
                inputs.len()
            )));
        }
    }
    UintNode::new(byte_width, inputs)
}

fn parse_number(s: &str) -> Result<u64, ItemError> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|_| ItemError::Syntax(format!("number out of range: {}", s)))
}
