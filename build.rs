//! Build script to generate embedded puzzles
//!
//! Reads puzzle files and generates Rust source code with a const table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Puzzle files shipped with the game, in menu order
const PUZZLE_FILES: &[(&str, &str)] = &[
    ("puzzle1", "data/puzzle1.txt"),
    ("puzzle2", "data/puzzle2.txt"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_puzzle_table(
        PUZZLE_FILES,
        &Path::new(&out_dir).join("puzzles.rs"),
        "PUZZLES",
        "Puzzles bundled with the game as (name, contents) pairs",
    );

    // Rebuild if puzzles change
    for (_, path) in PUZZLE_FILES {
        println!("cargo:rerun-if-changed={path}");
    }
}

fn generate_puzzle_table(
    files: &[(&str, &str)],
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (name, path) in files {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
        // Debug formatting yields a valid, escaped string literal
        writeln!(output, "    ({name:?}, {content:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", files.len()).unwrap();
}
