//! `aff` — command-line front end for the AFF chart validator.

mod render;

use std::fs;
use std::process;

use aff_toolchain_core::{CheckerRun, Difficulty, chart_from_json_file, filter_by_level, validate};
use aff_toolchain_diagnostics::{self as diag, Lang, Severity};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::render::Format;

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "aff",
    version,
    about = "AFF toolchain — validate Arcaea chart files and explain diagnostics"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Validate a parsed chart tree (the JSON form produced by the AFF
    /// grammar).
    Lint {
        /// Path to the chart tree JSON.
        tree: String,
        /// Path to the original `.aff` source. Enables source-annotated
        /// rendering and difficulty detection from the filename.
        #[arg(long)]
        source: Option<String>,
        /// Difficulty class (pst, prs, ftr, byd, etr); overrides the
        /// filename convention.
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Minimum severity to report.
        #[arg(long, value_enum, default_value_t = LevelArg::Hint)]
        level: LevelArg,
        /// Message locale.
        #[arg(long, value_enum, default_value_t = LangArg::En)]
        lang: LangArg,
        /// Tolerate non-standard arc geometry (skips the playfield
        /// checks).
        #[arg(long)]
        allow_custom_geometry: bool,
    },

    /// Explain a diagnostic ID (e.g. AFF1101).
    Explain {
        /// The diagnostic code to explain.
        id: String,
    },
}

/// Minimum severity for the `--level` flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warning,
    /// Everything except hints.
    Info,
    /// Everything.
    Hint,
}

impl From<LevelArg> for Severity {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Error => Severity::Error,
            LevelArg::Warning => Severity::Warning,
            LevelArg::Info => Severity::Information,
            LevelArg::Hint => Severity::Hint,
        }
    }
}

/// Message locale for the `--lang` flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LangArg {
    /// English.
    En,
    /// Simplified Chinese.
    Zh,
}

impl From<LangArg> for Lang {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::En => Lang::En,
            LangArg::Zh => Lang::Zh,
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Lint {
            tree,
            source,
            difficulty,
            level,
            lang,
            allow_custom_geometry,
        } => cmd_lint(
            &tree,
            source.as_deref(),
            difficulty,
            level,
            lang.into(),
            allow_custom_geometry,
            format,
        )?,
        Cmd::Explain { id } => cmd_explain(&id),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_lint(
    tree_path: &str,
    source_path: Option<&str>,
    difficulty: Option<Difficulty>,
    level: LevelArg,
    lang: Lang,
    allow_custom_geometry: bool,
    format: Format,
) -> Result<()> {
    let chart = chart_from_json_file(tree_path)
        .with_context(|| format!("failed to load chart tree {tree_path}"))?;

    // Explicit flag beats the filename convention; the convention reads
    // the source filename when given, the tree filename otherwise.
    let difficulty =
        difficulty.unwrap_or_else(|| Difficulty::from_uri(source_path.unwrap_or(tree_path)));

    let run = CheckerRun {
        difficulty,
        allow_custom_geometry,
    };
    let result = validate(&chart, &run);
    let issues = filter_by_level(result.issues, level.into());
    let has_errors = issues.iter().any(|d| d.severity == Severity::Error);

    match format {
        Format::Json => render::render_diagnostics_json(&issues),
        Format::Pretty => {
            if let Some(source_path) = source_path {
                let source = fs::read_to_string(source_path)
                    .with_context(|| format!("failed to read source {source_path}"))?;
                render::render_diagnostics_pretty(&source, source_path, &issues, lang);
            } else {
                render::render_diagnostics_plain(&issues, lang);
            }
            render::print_summary(&issues);
        }
    }

    if has_errors {
        process::exit(1);
    }
    Ok(())
}

fn cmd_explain(id: &str) {
    match diag::explain(id) {
        Some(explanation) => println!("{id}: {explanation}"),
        None => {
            eprintln!("unknown diagnostic code '{id}'");
            process::exit(1);
        }
    }
}
