//! Golden snapshot tests for C emission
//!
//! These tests translate `.go` input files and compare the emitted C against stored snapshots.
//! This ensures emitter changes are reviewed and intentional.
//!
//! Run with: `cargo test --test emit_snapshot_tests`
//! Review changes: `cargo insta review`

use goc::emit::{EmitConfig, emit_source_file};
use goc::{lexer, parser};
use std::fs;

/// Generate C code from Go-subset source
fn generate_c(source: &str) -> String {
    let tokens = lexer::lex(source).expect("lexer failed");
    let ast = parser::parse(&tokens).expect("parser failed");
    emit_source_file(&ast, EmitConfig::default()).expect("emission failed")
}

/// Load a test file from the emit_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/emit_snapshots/{}.go", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

#[test]
fn test_basic_function_emit() {
    let source = load_test_file("basic_function");
    let c_code = generate_c(&source);
    insta::assert_snapshot!("basic_function", c_code);
}

#[test]
fn test_control_flow_emit() {
    let source = load_test_file("control_flow");
    let c_code = generate_c(&source);
    insta::assert_snapshot!("control_flow", c_code);
}

#[test]
fn test_declarations_emit() {
    let source = load_test_file("declarations");
    let c_code = generate_c(&source);
    insta::assert_snapshot!("declarations", c_code);
}

#[test]
fn test_expressions_emit() {
    let source = load_test_file("expressions");
    let c_code = generate_c(&source);
    insta::assert_snapshot!("expressions", c_code);
}

#[test]
fn test_linked_list_emit() {
    let source = load_test_file("linked_list");
    let c_code = generate_c(&source);
    insta::assert_snapshot!("linked_list", c_code);
}

/// Every snapshot input must emit the same text twice.
#[test]
fn test_snapshot_inputs_emit_deterministically() {
    insta::glob!("emit_snapshots/*.go", |path| {
        let source = fs::read_to_string(path).unwrap();
        assert_eq!(generate_c(&source), generate_c(&source));
    });
}
