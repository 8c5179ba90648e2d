//! Provide the canonical vocabulary of the accepted Go subset and small pure helpers shared by the
//! syntax frontend and the C emitter.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no AST types.
//! - Current scope: keyword/operator/punctuation registries (`lang`) and literal helpers
//!   (`strings`), e.g. unquoting import paths.

pub mod lang;
pub mod strings;
