//! Build script to generate embedded word lists
//!
//! Reads the word list files and generates Rust source code with const arrays.
//! Every answer is folded into the allowed list so a target is always a legal guess.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let answers = read_word_list("data/answers.txt");
    let mut allowed: BTreeSet<String> = read_word_list("data/allowed.txt").into_iter().collect();
    allowed.extend(answers.iter().cloned());

    generate_word_list(
        &answers,
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Words that can be picked as the hidden target",
    );

    let allowed: Vec<String> = allowed.into_iter().collect();
    generate_word_list(
        &allowed,
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "All guessable words (a superset of ANSWERS)",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn read_word_list(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut seen = BTreeSet::new();
    let mut words = Vec::new();
    for line in content.lines() {
        let word = line.trim().to_lowercase();
        if word.is_empty() {
            continue;
        }
        assert!(
            word.chars().all(|c| c.is_ascii_lowercase()),
            "{input_path}: '{word}' contains non-letter characters"
        );
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}

fn generate_word_list(words: &[String], output_path: &Path, const_name: &str, doc_comment: &str) {
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
