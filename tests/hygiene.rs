//! Hygiene — enforces coding standards at test time
//!
//! Scans `src/` for antipatterns. Each rule has a budget (ideally zero). If you
//! must add one, you have to fix an existing one first — the budget never grows.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, why: "panics in the browser abort hydration" },
    Rule { pattern: ".expect(", budget: 0, why: "panics in the browser abort hydration" },
    Rule { pattern: "panic!(", budget: 0, why: "panics in the browser abort hydration" },
    Rule { pattern: "unreachable!(", budget: 0, why: "encode the invariant in types instead" },
    Rule { pattern: "todo!(", budget: 0, why: "stubs must not ship" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "stubs must not ship" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "delete unused code" },
    // SSR stubs consume hydrate-only parameters with `let _ = ...`.
    Rule { pattern: "let _ =", budget: 11, why: "discarded values hide failures" },
    Rule { pattern: ".ok()", budget: 2, why: "discarded errors hide failures" },
];

// Substrings that would put a token value into a log line.
const TOKEN_LEAKS: &[&str] = &["access_token}", "refresh_token}", "pair.access", "pair.refresh", "{token"];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn is_test_file(file: &SourceFile) -> bool {
    file.path.to_string_lossy().ends_with("_test.rs")
}

/// Production `.rs` files under `src/`.
fn production_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files.retain(|f| !is_test_file(f));
    files
}

#[test]
fn antipattern_budgets() {
    let files = production_files();
    let mut over = Vec::new();
    for rule in RULES {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|f| {
                let count = f.content.lines().filter(|l| l.contains(rule.pattern)).count();
                (count > 0).then(|| format!("    {}: {count}", f.path.display()))
            })
            .collect();
        let total: usize = files
            .iter()
            .map(|f| f.content.lines().filter(|l| l.contains(rule.pattern)).count())
            .sum();
        if total > rule.budget {
            over.push(format!(
                "`{}` budget exceeded: found {total}, max {} ({})\n{}",
                rule.pattern,
                rule.budget,
                rule.why,
                hits.join("\n")
            ));
        }
    }
    assert!(over.is_empty(), "{}", over.join("\n"));
}

#[test]
fn log_lines_never_format_tokens() {
    let mut leaks = Vec::new();
    for file in production_files() {
        for (n, line) in file.content.lines().enumerate() {
            if !line.contains("log::") {
                continue;
            }
            if TOKEN_LEAKS.iter().any(|needle| line.contains(needle)) {
                leaks.push(format!("  {}:{}: {}", file.path.display(), n + 1, line.trim()));
            }
        }
    }
    assert!(leaks.is_empty(), "log lines must not include token values:\n{}", leaks.join("\n"));
}

#[test]
fn sibling_test_modules_exist() {
    let mut missing = Vec::new();
    for file in production_files() {
        let dir = file.path.parent().unwrap_or(Path::new("src"));
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(name) = rest.strip_suffix("\"]") else {
                continue;
            };
            if !dir.join(name).is_file() {
                missing.push(format!("  {} -> {name}", file.path.display()));
            }
        }
    }
    assert!(missing.is_empty(), "missing test modules:\n{}", missing.join("\n"));
}
