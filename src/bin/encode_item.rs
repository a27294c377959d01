//! Encode SECS-II unsigned-integer items given in text form.
//!
//! Build with `--features cli`.
//!
//! Usage:
//!   encode_item [OPTIONS] [ITEM ...]
//!   encode_item [OPTIONS] < items.txt
//!
//! Each ITEM is an item in text form, e.g. `<U4[2] X 10>`. Without ITEM arguments,
//! one item per non-empty stdin line is read.
//!
//! Options:
//!   --set NAME=VALUE, -s NAME=VALUE   Fill variable NAME (decimal, 0x hex, or negative)
//!
//! Prints `ITEM => hex bytes` per item. Exit code 1 if any item fails to parse or
//! still has unresolved variables. Set `RUST_LOG=secs2ast=debug` for diagnostics.

use anyhow::{anyhow, bail, Context};
use secs2ast::{parse_uint, ItemNode, ItemValue};
use std::collections::HashMap;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

fn parse_assignment(arg: &str) -> anyhow::Result<(String, ItemValue)> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got {:?}", arg))?;
    let value = value.trim();
    let parsed = if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        ItemValue::U64(u64::from_str_radix(hex, 16).with_context(|| format!("bad hex value for {}", name))?)
    } else if value.starts_with('-') {
        ItemValue::I64(value.parse().with_context(|| format!("bad value for {}", name))?)
    } else {
        ItemValue::U64(value.parse().with_context(|| format!("bad value for {}", name))?)
    };
    Ok((name.trim().to_string(), parsed))
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn encode_one(src: &str, values: &HashMap<String, ItemValue>) -> anyhow::Result<Vec<u8>> {
    let node = parse_uint(src)?.fill_values(values)?;
    let unresolved = node.variables();
    if !unresolved.is_empty() {
        bail!("unresolved variables: {}", unresolved.join(", "));
    }
    Ok(node.try_to_bytes()?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut values = HashMap::new();
    let mut items = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--set" || arg == "-s" {
            let assignment = args.next().ok_or_else(|| anyhow!("{} needs NAME=VALUE", arg))?;
            let (name, value) = parse_assignment(&assignment)?;
            values.insert(name, value);
        } else if let Some(assignment) = arg.strip_prefix("--set=") {
            let (name, value) = parse_assignment(assignment)?;
            values.insert(name, value);
        } else {
            items.push(arg);
        }
    }

    if items.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                items.push(line.trim().to_string());
            }
        }
    }

    let mut has_error = false;
    for src in &items {
        match encode_one(src, &values) {
            Ok(bytes) => println!("{} => {}", src, hex(&bytes)),
            Err(e) => {
                eprintln!("{}: {}", src, e);
                has_error = true;
            }
        }
    }
    if has_error {
        std::process::exit(1);
    }
    Ok(())
}
