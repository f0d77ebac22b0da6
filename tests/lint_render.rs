//! Lint: detect bracket-key text (`[X]`) rendered without click registration.
//!
//! Any `[X]`-style key hint shown in a screen is expected to be tappable on
//! touch devices, which means the line has to go through `push_clickable()`
//! (or a widget that registers its own targets, like `TabBar::tab`).
//!
//! Rendering it with a plain `push(Line::from(... "[S]..." ...))` shows the
//! hint but leaves it un-clickable, a recurring source of mobile tap bugs.
//!
//! This test scans every screen source file under `src/screens/` and flags
//! `push(` calls whose string arguments contain bracket-key patterns.

use std::fs;
use std::path::Path;

/// Check if a line contains a bracket-key pattern like `[G]`, `[1]`, `[S]`.
fn contains_bracket_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 3 {
        return false;
    }
    for i in 0..bytes.len() - 2 {
        if bytes[i] == b'[' && bytes[i + 2] == b']' {
            let ch = bytes[i + 1];
            if ch.is_ascii_alphanumeric() {
                return true;
            }
        }
    }
    false
}

/// Scan source for `push(` calls (non-clickable) containing bracket keys.
fn find_bracket_key_in_push(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        // Skip comments
        if trimmed.starts_with("//") || trimmed.starts_with("///") {
            continue;
        }

        if !contains_bracket_key(line) {
            continue;
        }

        let has_push = line.contains(".push(");
        let has_clickable = line.contains("push_clickable(");

        if has_push && !has_clickable {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

fn scan_dir(dir: &Path, violations: &mut Vec<String>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|e| panic!("read_dir {dir:?}: {e}"));
    for entry in entries {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            scan_dir(&path, violations);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let source = fs::read_to_string(&path).expect("read source");
            for (line, text) in find_bracket_key_in_push(&source) {
                violations.push(format!("{}:{line}: {text}", path.display()));
            }
        }
    }
}

#[test]
fn bracket_keys_are_always_clickable() {
    let screens = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/screens");
    let mut violations = Vec::new();
    scan_dir(&screens, &mut violations);

    assert!(
        violations.is_empty(),
        "bracket-key text rendered without click registration:\n{}",
        violations.join("\n")
    );
}

#[cfg(test)]
mod detector_tests {
    use super::*;

    #[test]
    fn detects_single_key_patterns() {
        assert!(contains_bracket_key("[G] Giriş"));
        assert!(contains_bracket_key("xx [1] yy"));
        assert!(!contains_bracket_key("[Yeni]"));
        assert!(!contains_bracket_key("[ ]"));
        assert!(!contains_bracket_key("no brackets"));
        assert!(!contains_bracket_key("[]"));
    }

    #[test]
    fn flags_plain_push_only() {
        let source = r#"
            cl.push(Line::from(" [S] Sepete dön"));
            cl.push_clickable(Line::from(" [O] Ödeme"), action);
            lines.push(Line::from("no keys here"));
            // cl.push(Line::from(" [X] in a comment"));
        "#;
        let violations = find_bracket_key_in_push(source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].0, 2);
    }
}
