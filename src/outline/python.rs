//! Per-file Python outlining.
//!
//! Parses one source file with rustpython and renders its imports, classes,
//! and functions as indented outline lines with 1-based source line numbers.

use rustpython_parser::{ast, Parse};

/// Outline section for a single file: the relative path as a header, then
/// one line per structural element. A file that fails to parse gets a
/// `[syntax error: …]` line instead of aborting the whole report.
pub fn outline_file(relative_path: &str, source: &str) -> String {
    let suite = match ast::Suite::parse(source, relative_path) {
        Ok(suite) => suite,
        Err(err) => {
            tracing::warn!("failed to parse {}: {}", relative_path, err);
            return format!("{}:\n- [syntax error: {}]", relative_path, err);
        }
    };

    let index = LineIndex::new(source);
    let mut lines = vec![format!("{}:", relative_path)];
    render_body(&suite, 0, &index, &mut lines);
    lines.join("\n")
}

fn render_body(body: &[ast::Stmt], depth: usize, index: &LineIndex, lines: &mut Vec<String>) {
    for stmt in body {
        match stmt {
            ast::Stmt::Import(import) => {
                push_item(lines, depth, render_import(import), index.line_of(import.range.start()));
            }
            ast::Stmt::ImportFrom(import) => {
                push_item(
                    lines,
                    depth,
                    render_import_from(import),
                    index.line_of(import.range.start()),
                );
            }
            ast::Stmt::FunctionDef(def) => {
                let item = format!("def {}({})", def.name.as_str(), render_args(&def.args));
                push_item(lines, depth, item, index.line_of(def.range.start()));
                render_body(&def.body, depth + 1, index, lines);
            }
            ast::Stmt::AsyncFunctionDef(def) => {
                let item = format!("async def {}({})", def.name.as_str(), render_args(&def.args));
                push_item(lines, depth, item, index.line_of(def.range.start()));
                render_body(&def.body, depth + 1, index, lines);
            }
            ast::Stmt::ClassDef(def) => {
                let item = format!("class {}", def.name.as_str());
                push_item(lines, depth, item, index.line_of(def.range.start()));
                render_body(&def.body, depth + 1, index, lines);
            }
            _ => {}
        }
    }
}

fn push_item(lines: &mut Vec<String>, depth: usize, item: String, line: usize) {
    lines.push(format!("{}- {} (line {})", "  ".repeat(depth), item, line));
}

fn render_import(import: &ast::StmtImport) -> String {
    let names: Vec<String> = import.names.iter().map(render_alias).collect();
    format!("import {}", names.join(", "))
}

fn render_import_from(import: &ast::StmtImportFrom) -> String {
    let dots = ".".repeat(import.level.as_ref().map_or(0, |level| level.to_u32() as usize));
    let module = import.module.as_ref().map(|m| m.as_str()).unwrap_or("");
    let names: Vec<String> = import.names.iter().map(render_alias).collect();
    format!("from {}{} import {}", dots, module, names.join(", "))
}

fn render_alias(alias: &ast::Alias) -> String {
    match &alias.asname {
        Some(asname) => format!("{} as {}", alias.name.as_str(), asname.as_str()),
        None => alias.name.as_str().to_string(),
    }
}

/// Parameter list in definition order: positional-only, `/`, positional,
/// `*args` (or a bare `*` before keyword-only names), keyword-only, `**kwargs`.
/// Defaults and annotations are not shown.
fn render_args(args: &ast::Arguments) -> String {
    let mut parts: Vec<String> = Vec::new();

    for arg in &args.posonlyargs {
        parts.push(arg.def.arg.as_str().to_string());
    }
    if !args.posonlyargs.is_empty() {
        parts.push("/".to_string());
    }
    for arg in &args.args {
        parts.push(arg.def.arg.as_str().to_string());
    }
    if let Some(vararg) = &args.vararg {
        parts.push(format!("*{}", vararg.arg.as_str()));
    } else if !args.kwonlyargs.is_empty() {
        parts.push("*".to_string());
    }
    for arg in &args.kwonlyargs {
        parts.push(arg.def.arg.as_str().to_string());
    }
    if let Some(kwarg) = &args.kwarg {
        parts.push(format!("**{}", kwarg.arg.as_str()));
    }

    parts.join(", ")
}

/// Byte-offset to 1-based line number lookup.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut starts = vec![0];
        for (idx, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(idx + 1);
            }
        }
        Self { starts }
    }

    fn line_of(&self, offset: impl Into<u32>) -> usize {
        let offset = offset.into() as usize;
        match self.starts.binary_search(&offset) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        }
    }
}
