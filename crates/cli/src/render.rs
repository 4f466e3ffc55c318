//! Pretty diagnostic rendering using ariadne.
//!
//! Converts the toolchain's [`Diagnostic`] type into ariadne [`Report`]s
//! for coloured, source-annotated terminal output when the original `.aff`
//! source is available, with a plain text fallback otherwise and a
//! structured JSON mode for piped output.

use std::io::{self, IsTerminal};

use aff_toolchain_diagnostics::{Diagnostic, Lang, Severity};
use ariadne::{Color, Config, Label, Report, ReportKind, Source};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for diagnostic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, source-annotated output (ariadne).
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Resolve an explicit choice, or detect based on whether stdout is a
    /// TTY.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            // Default: pretty for interactive terminals, JSON for pipes
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Severity mapping ────────────────────────────────────────────────────

fn report_kind(severity: Severity) -> ReportKind<'static> {
    match severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Information | Severity::Hint => ReportKind::Advice,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Information => Color::Blue,
        Severity::Hint => Color::Cyan,
    }
}

// ── Pretty rendering ────────────────────────────────────────────────────

/// Render diagnostics with source context (line numbers, underlines,
/// related-location labels) to stderr.
pub(crate) fn render_diagnostics_pretty(
    source: &str,
    filename: &str,
    diagnostics: &[Diagnostic],
    lang: Lang,
) {
    if diagnostics.is_empty() {
        return;
    }

    let config = Config::default().with_compact(false);

    // Build the Source once (O(n) line index) and reuse across all reports.
    let mut cache = (filename, Source::from(source));

    for diag in diagnostics {
        // Clamp spans to source length to avoid panics on truncated input.
        let start = diag.span.start.min(source.len());
        let end = diag.span.end.min(source.len()).max(start);

        let mut builder = Report::build(report_kind(diag.severity), (filename, start..end))
            .with_code(diag.id.as_ref())
            .with_message(diag.message.get(lang))
            .with_config(config)
            .with_label(
                Label::new((filename, start..end))
                    .with_message(diag.message.get(lang))
                    .with_color(severity_color(diag.severity)),
            );

        for related in &diag.related {
            let r_start = related.span.start.min(source.len());
            let r_end = related.span.end.min(source.len()).max(r_start);
            builder = builder.with_label(
                Label::new((filename, r_start..r_end))
                    .with_message(related.message.get(lang))
                    .with_color(Color::Fixed(245)),
            );
        }

        if let Some(ctx) = &diag.context {
            let note: String = ctx
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(", ");
            builder = builder.with_note(note);
        }

        if let Some(explanation) = diag.explain() {
            builder = builder.with_help(explanation);
        }

        builder.finish().eprint(&mut cache).ok();
    }
}

/// Render diagnostics without source context, one line each, to stderr.
pub(crate) fn render_diagnostics_plain(diagnostics: &[Diagnostic], lang: Lang) {
    for diag in diagnostics {
        eprintln!(
            "{}[{}]: {} ({}..{})",
            diag.severity,
            diag.id,
            diag.message.get(lang),
            diag.span.start,
            diag.span.end
        );
        for related in &diag.related {
            eprintln!(
                "  = related: {} ({}..{})",
                related.message.get(lang),
                related.span.start,
                related.span.end
            );
        }
        if let Some(explanation) = diag.explain() {
            eprintln!("  = help: {explanation}");
        }
    }
}

// ── JSON rendering ──────────────────────────────────────────────────────

/// Render diagnostics as a JSON array (both locales included) to stdout.
pub(crate) fn render_diagnostics_json(diagnostics: &[Diagnostic]) {
    let json =
        serde_json::to_string_pretty(diagnostics).expect("Diagnostic serialization cannot fail");
    println!("{json}");
}

// ── Summary line ────────────────────────────────────────────────────────

/// Print a coloured summary line showing per-severity counts.
///
/// Example: `2 errors, 1 warning, 3 hints`
pub(crate) fn print_summary(diagnostics: &[Diagnostic]) {
    use ariadne::Fmt;

    let (mut errors, mut warnings, mut infos, mut hints) = (0usize, 0usize, 0usize, 0usize);
    for d in diagnostics {
        match d.severity {
            Severity::Error => errors += 1,
            Severity::Warning => warnings += 1,
            Severity::Information => infos += 1,
            Severity::Hint => hints += 1,
        }
    }

    if errors + warnings + infos + hints == 0 {
        return;
    }

    let plural = |n: usize| if n == 1 { "" } else { "s" };
    let mut parts = Vec::new();
    if errors > 0 {
        parts.push(format!(
            "{}",
            format!("{errors} error{}", plural(errors)).fg(Color::Red)
        ));
    }
    if warnings > 0 {
        parts.push(format!(
            "{}",
            format!("{warnings} warning{}", plural(warnings)).fg(Color::Yellow)
        ));
    }
    if infos > 0 {
        parts.push(format!("{}", format!("{infos} info").fg(Color::Blue)));
    }
    if hints > 0 {
        parts.push(format!(
            "{}",
            format!("{hints} hint{}", plural(hints)).fg(Color::Cyan)
        ));
    }
    eprintln!("{}", parts.join(", "));
}
