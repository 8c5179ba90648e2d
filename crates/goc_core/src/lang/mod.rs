//! Registry-first language vocabulary.
//!
//! Each submodule exposes a stable id enum, a `const` metadata table, and lookup helpers
//! (`from_str`, `as_str`, `info_for`). The lexer and parser consume the ids; the emitter uses the
//! canonical spellings when it writes operator tokens back out.
//!
//! ## See also
//! - [`keywords`]
//! - [`operators`]
//! - [`punctuation`]

pub mod keywords;
pub mod operators;
pub mod punctuation;
