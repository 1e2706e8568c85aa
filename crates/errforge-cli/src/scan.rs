//! Source scanning: collect error specifications from Rust source files.
//!
//! A spec is a `const` of the sentinel type whose value is a string literal,
//! either directly (`const E: Err = "...";` for type-aliased sentinels) or
//! through a single-argument constructor call (`const E: Err = Err("...");`).
//! Constants of other types are skipped; a sentinel constant initialized
//! with anything but a string literal is fatal.
//!
//! Order is deterministic: sorted file order when scanning a directory, then
//! declaration order within each file, recursing into inline modules.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use syn::{Expr, Item, Lit, Type};

use errforge_core::spec::ErrorSpec;

/// Collect specs from the given files, or from a single directory's `*.rs`
/// entries.
pub fn collect_specs(paths: &[PathBuf], sentinel: &str) -> Result<Vec<ErrorSpec>> {
    let mut specs = Vec::new();
    for file in source_files(paths)? {
        let src = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        let found =
            scan_source(&src, sentinel).with_context(|| format!("scanning {}", file.display()))?;
        specs.extend(found);
    }
    Ok(specs)
}

/// Collect specs from one source string.
pub fn scan_source(src: &str, sentinel: &str) -> Result<Vec<ErrorSpec>> {
    let file: syn::File = syn::parse_file(src).context("parsing source")?;
    let mut specs = Vec::new();
    collect_items(&file.items, sentinel, &mut specs)?;
    Ok(specs)
}

fn source_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if paths.len() == 1 && paths[0].is_dir() {
        let entries = std::fs::read_dir(&paths[0])
            .with_context(|| format!("reading directory {}", paths[0].display()))?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "rs"))
            .collect();
        files.sort();
        Ok(files)
    } else {
        Ok(paths.to_vec())
    }
}

fn collect_items(items: &[Item], sentinel: &str, specs: &mut Vec<ErrorSpec>) -> Result<()> {
    for item in items {
        match item {
            Item::Const(konst) => {
                if !type_matches(&konst.ty, sentinel) {
                    continue;
                }
                let template = template_literal(&konst.expr)
                    .with_context(|| format!("spec `{}`", konst.ident))?;
                specs.push(ErrorSpec::new(konst.ident.to_string(), template));
            }
            Item::Mod(module) => {
                if let Some((_, items)) = &module.content {
                    collect_items(items, sentinel, specs)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn type_matches(ty: &Type, sentinel: &str) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == sentinel),
        _ => false,
    }
}

fn template_literal(expr: &Expr) -> Result<String> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(s) => Ok(s.value()),
            _ => bail!("expected string literal"),
        },
        Expr::Call(call) => match call.args.first() {
            Some(Expr::Lit(lit)) => match &lit.lit {
                Lit::Str(s) => Ok(s.value()),
                _ => bail!("expected string literal argument"),
            },
            _ => bail!("expected string literal argument"),
        },
        _ => bail!("expected string literal or sentinel constructor call"),
    }
}
