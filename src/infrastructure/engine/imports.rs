//! Import closure resolution
//!
//! Finds the `@import`, `@use` and `@forward` directives in a stylesheet,
//! resolves them the way Sass does (partial prefix, extension and index
//! fallbacks, then load paths) and follows them until no new file turns up.

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::SyntaxError;
use crate::domain::services::normalize;

/// Extensions tried, in order, for an import without one
const IMPORT_EXTENSIONS: [&str; 3] = ["scss", "sass", "css"];

const DIRECTIVES: [&str; 3] = ["@import", "@use", "@forward"];

/// One import target found in a stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDirective {
    /// Target as written, without quotes
    pub target: String,
    /// 1-indexed line of the directive
    pub line: usize,
}

/// Extract the stylesheet imports from `source`
///
/// Plain CSS imports (`url(...)`, remote URLs, `.css` files and media-query
/// imports loaded with `@import`) and built-in `sass:` modules are skipped.
pub fn scan_directives(source: &str) -> Vec<ImportDirective> {
    let mut directives = Vec::new();

    for statement in statements(source) {
        let trimmed = statement.text.trim_start();
        let Some(keyword) = DIRECTIVES.into_iter().find(|d| {
            trimmed.starts_with(*d) && !is_ident_char(trimmed[d.len()..].chars().next())
        }) else {
            continue;
        };

        let rest = trimmed[keyword.len()..].trim();
        let targets = if keyword == "@import" {
            split_import_list(rest)
        } else {
            first_target(rest)
                .map(|target| ImportItem {
                    target,
                    has_media: false,
                })
                .into_iter()
                .collect()
        };

        for item in targets {
            if item.has_media || is_plain_css(keyword, &item.target) {
                continue;
            }
            directives.push(ImportDirective {
                target: item.target,
                line: statement.line,
            });
        }
    }

    directives
}

/// Resolve `target` as imported from a file in `from_dir`
pub fn resolve_import(target: &str, from_dir: &Path, load_paths: &[PathBuf]) -> Option<PathBuf> {
    std::iter::once(from_dir)
        .chain(load_paths.iter().map(PathBuf::as_path))
        .find_map(|base| resolve_in(&base.join(target)))
        .map(|p| normalize(&p))
}

/// Every file `path` imports, directly or transitively, in discovery order
///
/// Cycles are followed once. An import that resolves to nothing fails the
/// whole closure, as it would fail compilation.
pub fn import_closure(path: &Path, load_paths: &[PathBuf]) -> Result<Vec<PathBuf>, SyntaxError> {
    let root = normalize(path);
    let mut visited: HashSet<PathBuf> = HashSet::from([root.clone()]);
    let mut queue: VecDeque<PathBuf> = VecDeque::from([root]);
    let mut closure = Vec::new();

    while let Some(current) = queue.pop_front() {
        let source = fs::read_to_string(&current).map_err(|e| {
            SyntaxError::new(
                format!("File to import not found or unreadable: {} ({})", current.display(), e),
                &current,
            )
        })?;
        let from_dir = current.parent().unwrap_or(Path::new(""));

        for directive in scan_directives(&source) {
            let resolved = resolve_import(&directive.target, from_dir, load_paths).ok_or_else(|| {
                SyntaxError::new(
                    format!("File to import not found or unreadable: {}", directive.target),
                    &current,
                )
                .with_line(directive.line)
            })?;

            // Plain CSS is inlined by the engine but never imports anything.
            let is_css = resolved.extension().map(|e| e == "css").unwrap_or(false);
            if visited.insert(resolved.clone()) {
                closure.push(resolved.clone());
                if !is_css {
                    queue.push_back(resolved);
                }
            }
        }
    }

    Ok(closure)
}

fn resolve_in(candidate: &Path) -> Option<PathBuf> {
    let dir = candidate.parent().unwrap_or(Path::new(""));
    let name = candidate.file_name()?.to_str()?;
    let has_extension = candidate
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| IMPORT_EXTENSIONS.contains(&e))
        .unwrap_or(false);

    let mut tries: Vec<PathBuf> = Vec::new();
    if has_extension {
        tries.push(dir.join(name));
        tries.push(dir.join(format!("_{}", name)));
    } else {
        for ext in IMPORT_EXTENSIONS {
            tries.push(dir.join(format!("{}.{}", name, ext)));
            tries.push(dir.join(format!("_{}.{}", name, ext)));
        }
        for ext in IMPORT_EXTENSIONS {
            tries.push(candidate.join(format!("index.{}", ext)));
            tries.push(candidate.join(format!("_index.{}", ext)));
        }
    }

    tries.into_iter().find(|p| p.is_file())
}

/// A comment-free statement and the line it starts on
#[derive(Debug, Default)]
struct Statement {
    text: String,
    line: usize,
}

/// Split `source` into statements at `;`, `{` and `}` outside strings
///
/// A line break also ends a statement unless the statement so far is a bare
/// directive keyword or ends with a comma, so multi-line `@import` lists stay
/// whole in both syntaxes.
fn statements(source: &str) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut current = Statement::default();
    let mut in_block_comment = false;

    for (index, raw) in source.lines().enumerate() {
        if !continues_on_next_line(&current.text) {
            flush(&mut statements, &mut current);
        }

        let mut quote: Option<char> = None;
        for c in strip_comments(raw, &mut in_block_comment).chars() {
            if current.text.trim().is_empty() {
                current.line = index + 1;
            }
            match (quote, c) {
                (Some(q), c) if c == q => {
                    quote = None;
                    current.text.push(c);
                }
                (Some(_), c) => current.text.push(c),
                (None, '"') | (None, '\'') => {
                    quote = Some(c);
                    current.text.push(c);
                }
                (None, ';') | (None, '{') | (None, '}') => flush(&mut statements, &mut current),
                (None, c) => current.text.push(c),
            }
        }
        current.text.push(' ');
    }
    flush(&mut statements, &mut current);

    statements
}

fn continues_on_next_line(text: &str) -> bool {
    let text = text.trim();
    text.ends_with(',') || DIRECTIVES.contains(&text)
}

fn flush(statements: &mut Vec<Statement>, current: &mut Statement) {
    let statement = std::mem::take(current);
    if !statement.text.trim().is_empty() {
        statements.push(statement);
    }
}

fn strip_comments(line: &str, in_block_comment: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if *in_block_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                *in_block_comment = false;
            }
            continue;
        }
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
                out.push(c);
            }
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    out.push(c);
                }
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    *in_block_comment = true;
                }
                _ => out.push(c),
            },
        }
    }

    out
}

fn is_ident_char(c: Option<char>) -> bool {
    c.map(|c| c.is_alphanumeric() || c == '-' || c == '_')
        .unwrap_or(false)
}

/// One entry of an `@import` list
struct ImportItem {
    target: String,
    /// A media query follows the target, which makes it a plain CSS import
    has_media: bool,
}

/// Targets of an `@import` list: `"a", 'b'` or, in the indented syntax, `a, b`
fn split_import_list(rest: &str) -> Vec<ImportItem> {
    let mut items = Vec::new();
    let mut target = String::new();
    let mut trailing = String::new();
    let mut quoted = false;
    let mut quote: Option<char> = None;

    for c in rest.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => {
                quote = None;
                quoted = true;
            }
            (Some(_), c) => target.push(c),
            (None, ',') => {
                push_item(&mut items, &target, quoted, &trailing);
                target.clear();
                trailing.clear();
                quoted = false;
            }
            (None, '"') | (None, '\'') if !quoted => {
                if target.trim().is_empty() {
                    target.clear();
                }
                quote = Some(c);
            }
            (None, c) if quoted => trailing.push(c),
            (None, c) => target.push(c),
        }
    }
    push_item(&mut items, &target, quoted, &trailing);
    items
}

fn push_item(items: &mut Vec<ImportItem>, raw: &str, quoted: bool, trailing: &str) {
    let target = if quoted { raw } else { raw.trim() };
    if target.trim().is_empty() {
        return;
    }
    let has_media = if quoted {
        !trailing.trim().is_empty()
    } else {
        target.contains(char::is_whitespace)
    };
    items.push(ImportItem {
        target: target.to_string(),
        has_media,
    });
}

/// The quoted target of `@use`/`@forward`, ignoring `as`/`with`/`show` clauses
fn first_target(rest: &str) -> Option<String> {
    let mut chars = rest.chars();
    let quote = chars.next().filter(|c| *c == '"' || *c == '\'')?;
    let target: String = chars.take_while(|c| *c != quote).collect();
    (!target.is_empty()).then_some(target)
}

fn is_plain_css(keyword: &str, target: &str) -> bool {
    let lower = target.to_lowercase();
    lower.starts_with("sass:")
        || lower.starts_with("url(")
        || lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("//")
        || (keyword == "@import" && lower.ends_with(".css"))
}
