//! Build script to generate the embedded word-family catalog
//!
//! Reads the per-tier record files and generates Rust source code with const arrays
//! of raw records. Parsing happens at runtime through the same code path as
//! user-supplied catalog files.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const TIERS: [(&str, &str, &str); 3] = [
    ("data/level1.txt", "LEVEL1", "Level 1 word families (basic suffixes)"),
    ("data/level2.txt", "LEVEL2", "Level 2 word families (tricky transformations)"),
    ("data/level3.txt", "LEVEL3", "Level 3 word families (negatives and prefixes)"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (input, const_name, doc_comment) in TIERS {
        let file_name = format!("{}.rs", const_name.to_lowercase());
        generate_record_list(
            input,
            &Path::new(&out_dir).join(file_name),
            const_name,
            doc_comment,
        );
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_record_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let records: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = records.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word-family records").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for record in records {
        writeln!(output, "    {record:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of records in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
