//! Layering guardrails for the workspace crates.
//!
//! `goc_core` (vocabulary) sits below `goc_syntax` (frontend), which sits below the `goc` crate
//! (emitter + CLI). These tests scan the member manifests and fail if a lower layer lists a higher
//! one in `[dependencies]`.

/// Names listed in the `[dependencies]` table of a manifest.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_depends_on_no_workspace_crate() {
    let deps = dependency_names(include_str!("../crates/goc_core/Cargo.toml"));
    for forbidden in ["goc", "goc_syntax"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`goc_core` must not depend on `{forbidden}`"
        );
    }
}

#[test]
fn syntax_does_not_depend_on_emitter_crate() {
    let deps = dependency_names(include_str!("../crates/goc_syntax/Cargo.toml"));
    assert!(deps.iter().any(|d| d == "goc_core"));
    assert!(
        !deps.iter().any(|d| d == "goc"),
        "`goc_syntax` must not depend on the `goc` crate"
    );
}

#[test]
fn root_crate_uses_both_layers() {
    let deps = dependency_names(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "goc_core"));
    assert!(deps.iter().any(|d| d == "goc_syntax"));
}

#[test]
fn diagnostic_rendering_stays_in_syntax_crate() {
    let syntax = dependency_names(include_str!("../crates/goc_syntax/Cargo.toml"));
    assert!(syntax.iter().any(|d| d == "miette"));

    let root = dependency_names(include_str!("../Cargo.toml"));
    assert!(
        !root.iter().any(|d| d == "miette"),
        "the `goc` crate renders through `goc_syntax::diagnostics`, not `miette` directly"
    );
}
