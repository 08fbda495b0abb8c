//! Build script embedding the fallback word list
//!
//! Turns `data/fallback.txt` into a `FALLBACK` slice so the game can start
//! without any dictionary file on disk.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const SOURCE: &str = "data/fallback.txt";

fn main() {
    println!("cargo:rerun-if-changed={SOURCE}");

    let content =
        fs::read_to_string(SOURCE).unwrap_or_else(|e| panic!("Failed to read {SOURCE}: {e}"));

    let mut generated = String::new();
    generated.push_str("/// Built-in words used when no dictionary file can be loaded\n");
    generated.push_str("pub const FALLBACK: &[&str] = &[\n");
    for (number, word) in content.lines().map(str::trim).enumerate() {
        if word.is_empty() {
            continue;
        }
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "{SOURCE}:{}: '{word}' is not a lowercase ASCII word",
            number + 1
        );
        writeln!(generated, "    {word:?},").unwrap();
    }
    generated.push_str("];\n");

    let out_dir = env::var("OUT_DIR").unwrap();
    let target = Path::new(&out_dir).join("fallback.rs");
    fs::write(&target, generated)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));
}
