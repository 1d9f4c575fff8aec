//! Translate one Seoggi source file and materialize the result.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use itertools::Itertools;
use seo_core::{translate, SourceText, TranslationReport};
use tracing::{info, info_span, warn};

use crate::targets::{backend_for, parse_target, resolve_output_path};
use crate::utils::FileUtils;
use crate::{CliError, Result};

/// Arguments for the compile command (also used by Clap)
#[derive(Debug, Clone, Args)]
pub struct CompileArgs {
    /// Seoggi source file (must have a .seo extension)
    pub input: PathBuf,

    /// Target language (python, rust)
    #[arg(short, long, default_value = "python")]
    pub target: String,

    /// Output file (defaults to <build-dir>/seoggi.<extension>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory generated artifacts land in
    #[arg(long, default_value = "build")]
    pub build_dir: PathBuf,

    /// Write the translation report to this path as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Refuse to write output when any source line had no translation rule
    #[arg(long)]
    pub strict: bool,
}

/// Execute the compile command: read, translate, surface losses, write the
/// artifact, mark it executable.
pub fn compile_command(args: CompileArgs) -> Result<()> {
    let span = info_span!(
        "compile",
        input = %args.input.display(),
        target = %args.target
    );
    let _enter = span.enter();

    if !FileUtils::is_seoggi_file(&args.input) {
        return Err(CliError::InvalidInput(
            "Input file must have .seo extension".to_string(),
        ));
    }

    let backend = backend_for(parse_target(&args.target)?);
    let text = fs::read_to_string(&args.input).map_err(CliError::Io)?;
    let source = SourceText::new(args.input.display().to_string(), text);

    info!("Translating {} to {}", source.name(), backend.language());
    let output = translate(&source, backend);
    log_losses(&output.report);

    if let Some(report_path) = &args.report {
        let json = serde_json::to_string_pretty(&output.report)
            .map_err(|e| CliError::Report(e.to_string()))?;
        FileUtils::write_file(report_path, &json)?;
        info!("Report written: {}", report_path.display());
    }

    if args.strict && !output.report.dropped.is_empty() {
        return Err(CliError::Translation(format!(
            "{} line(s) had no translation rule; refusing to write output",
            output.report.dropped.len()
        )));
    }

    let output_path = resolve_output_path(args.output.as_ref(), &args.build_dir, backend);
    FileUtils::write_file(&output_path, &output.code)?;
    FileUtils::mark_executable(&output_path)?;

    info!("Generated: {}", output_path.display());
    println!("{} Successfully compiled!", style("✓").green());

    Ok(())
}

// Loss is surfaced here and in the report artifact; the output bytes never
// change because of it.
fn log_losses(report: &TranslationReport) {
    for dropped in &report.dropped {
        warn!(
            line = dropped.line,
            "No translation rule for `{}`", dropped.text
        );
    }
    if !report.untranslated_bodies.is_empty() {
        warn!(
            "{} declaration(s) emitted without a translated body: {}",
            report.untranslated_bodies.len(),
            report
                .untranslated_bodies
                .iter()
                .map(|b| b.decl.as_str())
                .join(", ")
        );
    }
    if !report.dropped.is_empty() {
        warn!(
            "{} of {} line(s) dropped from {}",
            report.dropped.len(),
            report.translated + report.elided + report.dropped.len(),
            report.source
        );
    }
}
