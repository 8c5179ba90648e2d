#![no_main]

use goc::emit::{EmitConfig, emit_source_file};
use goc::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            // Only trees the parser accepts reach the emitter
            if let Ok(file) = parser::parse(&tokens) {
                let _ = emit_source_file(&file, EmitConfig::default());
            }
        }
    }
});
