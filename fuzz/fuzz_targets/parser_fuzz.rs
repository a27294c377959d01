//! Item text fuzz target: feed arbitrary bytes to the uint item parser.
//! Parsing must not panic; any node it returns must encode, display and parse back
//! to itself. Build with: cargo fuzz run parser_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    use secs2ast::ItemNode;

    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    if let Ok(node) = secs2ast::parse_uint(s) {
        let bytes = node.to_bytes();
        assert_eq!(bytes.is_empty(), !node.variables().is_empty());
        let again = secs2ast::parse_uint(&node.to_string()).expect("display parses back");
        assert_eq!(again, node);
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run parser_fuzz");
}
