//! Property tests: payload layout for every width, substitution and text form.

use proptest::prelude::*;
use secs2ast::codec::{encode_header, FormatCode};
use secs2ast::{parse_uint, ItemNode, ItemValue, UintNode};
use std::collections::HashMap;

fn max_for(width: usize) -> u64 {
    if width == 8 {
        u64::MAX
    } else {
        (1u64 << (width * 8)) - 1
    }
}

/// A byte width together with in-range values for it.
fn width_and_values() -> impl Strategy<Value = (usize, Vec<u64>)> {
    prop_oneof![Just(1usize), Just(2), Just(4), Just(8)].prop_flat_map(|w| {
        (Just(w), prop::collection::vec(0..=max_for(w), 0..64))
    })
}

fn read_be(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

proptest! {
    #[test]
    fn prop_payload_is_big_endian_values((width, values) in width_and_values()) {
        let node = UintNode::new(width, values.iter().copied()).unwrap();
        let bytes = node.to_bytes();
        let header = encode_header(FormatCode::unsigned(width).unwrap(), values.len()).unwrap();
        prop_assert_eq!(bytes.len(), header.len() + values.len() * width);
        prop_assert_eq!(&bytes[..header.len()], header.as_slice());
        let decoded: Vec<u64> = bytes[header.len()..].chunks(width).map(read_be).collect();
        prop_assert_eq!(decoded, values);
    }

    #[test]
    fn prop_values_above_max_overflow(width in prop_oneof![Just(1usize), Just(2), Just(4)], extra in 1u64..1000) {
        let value = max_for(width) + extra;
        let err = UintNode::new(width, [value]).unwrap_err();
        let is_overflow_at_0 = matches!(err, secs2ast::ItemError::ValueOverflow { position: 0, .. });
        prop_assert!(is_overflow_at_0);
    }

    #[test]
    fn prop_fill_matches_direct_build((width, values) in width_and_values(), mask in prop::collection::vec(any::<bool>(), 64)) {
        let mut inputs = Vec::new();
        let mut replacements = HashMap::new();
        for (i, &v) in values.iter().enumerate() {
            if mask[i] {
                let name = format!("V{}", i);
                inputs.push(ItemValue::var(name.as_str()));
                replacements.insert(name, ItemValue::U64(v));
            } else {
                inputs.push(ItemValue::U64(v));
            }
        }
        let template = UintNode::new(width, inputs).unwrap();
        prop_assert_eq!(template.variables().len(), replacements.len());

        let filled = template.fill_values(&replacements).unwrap();
        let direct = UintNode::new(width, values.iter().copied()).unwrap();
        prop_assert_eq!(filled.to_bytes(), direct.to_bytes());
        prop_assert!(filled.variables().is_empty());
        if !replacements.is_empty() {
            prop_assert!(template.to_bytes().is_empty());
        }
    }

    #[test]
    fn prop_display_parses_back((width, values) in width_and_values()) {
        let node = UintNode::new(width, values.iter().copied()).unwrap();
        let again = parse_uint(&node.to_string()).unwrap();
        prop_assert_eq!(again, node);
    }
}
