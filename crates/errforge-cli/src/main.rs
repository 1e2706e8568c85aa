//! errforge — generate Rust error declarations from template specifications.
//!
//! Scans source files for constants of a chosen sentinel type, interprets
//! each constant's string value as a message template, and writes one
//! generated file containing the shared preamble plus a declaration group
//! set per spec.

mod output;
mod scan;

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use errforge_core::format;
use errforge_core::spec::GeneratorConfig;
use errforge_core::synth::Generator;

#[derive(Parser)]
#[command(
    name = "errforge",
    about = "Generate Rust error declarations from template specifications",
    version
)]
struct Cli {
    /// Sentinel type whose constants carry the error templates
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    type_name: String,

    /// Output file name (default: <dir>/<type>_def.rs)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Generate predicates compatible with host cause-chain search
    #[arg(long)]
    is: bool,

    /// Generate public declarations
    #[arg(long = "public", short = 'P')]
    public: bool,

    /// Suffix to drop from the end of spec names
    #[arg(long, default_value = "")]
    suffix: String,

    /// Extra imports for the generated header (comma-separated)
    #[arg(long = "import", value_name = "PATH", value_delimiter = ',')]
    imports: Vec<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Source files, or a single directory to scan
    #[arg(value_name = "PATH", default_value = ".")]
    paths: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut extra_imports = BTreeSet::new();
    for import in &cli.imports {
        let trimmed = import.trim();
        if !trimmed.is_empty() {
            extra_imports.insert(trimmed.to_string());
        }
    }

    let specs = scan::collect_specs(&cli.paths, &cli.type_name)?;
    if specs.is_empty() {
        output::print_warning(&format!("no specs of type {} found", cli.type_name));
        return Ok(());
    }
    tracing::info!("collected {} specs of type {}", specs.len(), cli.type_name);

    let config = GeneratorConfig {
        sentinel_type: cli.type_name.clone(),
        compat_is: cli.is,
        make_public: cli.public,
        suffix_to_trim: cli.suffix.clone(),
        extra_imports,
    };
    let raw = Generator::generate(config, &specs)?;

    let formatted = format::rustfmt(&raw)?;
    if let Some(warning) = &formatted.warning {
        output::print_warning(warning);
    }

    let output_path = match &cli.output {
        Some(path) => path.clone(),
        None => default_output_path(&cli.paths, &cli.type_name),
    };
    std::fs::write(&output_path, formatted.text.as_bytes())
        .with_context(|| format!("writing output to {}", output_path.display()))?;

    output::print_success(&format!(
        "generated {} error types in {}",
        specs.len(),
        output_path.display()
    ));
    Ok(())
}

/// Default output location: next to the scanned sources, named after the
/// sentinel type.
fn default_output_path(paths: &[PathBuf], type_name: &str) -> PathBuf {
    let dir = paths
        .first()
        .map(|p| {
            if p.is_dir() {
                p.clone()
            } else {
                match p.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => PathBuf::from("."),
                }
            }
        })
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(format!("{}_def.rs", type_name.to_lowercase()))
}
