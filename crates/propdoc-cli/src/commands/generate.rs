//! One full documentation build.
//!
//! Files are read and parsed on the rayon pool, one `parse_one` call per file
//! with its own diagnostic buffer. Everything user-visible (diagnostics, skipped
//! files, insertion into the output document) happens afterwards on the calling
//! thread, in traversal order.

use propdoc::{
    ClassRecord, Diagnostic, DiagnosticSink, DocOutput, Documentation, JsonOptions, TracingSink,
    parse_one, render_json,
};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

use crate::config::PropdocConfig;
use crate::error::{CliError, Result, ResultExt};
use crate::sources::{Source, collect_sources};
use crate::ui;

/// Outcome of a documentation build, before anything is written.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Records keyed by output key, for files that document a class.
    pub documentation: Documentation,
    /// Files that were read and parsed, documented or not.
    pub files_scanned: usize,
    /// Files that could not be read.
    pub files_skipped: usize,
    /// Malformed class blocks reported while parsing.
    pub diagnostics: usize,
}

enum FileOutcome {
    Parsed {
        key: String,
        record: Option<ClassRecord>,
        diagnostics: Vec<Diagnostic>,
    },
    Failed {
        key: String,
        error: CliError,
    },
}

fn parse_source(source: &Source) -> FileOutcome {
    let content = std::fs::read(&source.path)
        .with_path(&source.path)
        .and_then(|bytes| {
            String::from_utf8(bytes).map_err(|_| CliError::InvalidUtf8(source.path.clone()))
        });

    match content {
        Ok(content) => {
            let label = source.path.display().to_string();
            let mut diagnostics: Vec<Diagnostic> = Vec::new();
            let record = parse_one(&content, &label, &mut diagnostics);
            FileOutcome::Parsed {
                key: source.key.clone(),
                record,
                diagnostics,
            }
        }
        Err(error) => FileOutcome::Failed {
            key: source.key.clone(),
            error,
        },
    }
}

/// Collect, read and parse every input file.
///
/// Never fails: unreadable files are logged and counted in
/// [`BuildReport::files_skipped`].
pub fn build_documentation(config: &PropdocConfig) -> BuildReport {
    let sources = collect_sources(config);

    let outcomes: Vec<FileOutcome> = sources.par_iter().map(parse_source).collect();

    let mut report = BuildReport::default();
    let mut sink = TracingSink;
    for outcome in outcomes {
        match outcome {
            FileOutcome::Parsed {
                key,
                record,
                diagnostics,
            } => {
                report.files_scanned += 1;
                report.diagnostics += diagnostics.len();
                for diagnostic in diagnostics {
                    sink.report(diagnostic);
                }
                if let Some(record) = record {
                    report.documentation.add_record(key, record);
                }
            }
            FileOutcome::Failed { key, error } => {
                report.files_skipped += 1;
                tracing::warn!(file = %key, "skipping file: {}", error);
            }
        }
    }

    tracing::debug!(
        scanned = report.files_scanned,
        skipped = report.files_skipped,
        documented = report.documentation.len(),
        "documentation build finished"
    );
    report
}

/// `true` when the configuration names exactly one input and it is a file.
pub fn is_single_file(config: &PropdocConfig) -> bool {
    matches!(config.paths.as_slice(), [path] if path.is_file())
}

/// Shape the documentation into what gets written.
///
/// A single file input is written as its bare record (`null` when it documents
/// nothing); anything else is written as the path-keyed tree.
pub fn output_document(config: &PropdocConfig, documentation: &Documentation) -> DocOutput {
    if is_single_file(config) {
        DocOutput::Single(documentation.records.values().next().cloned())
    } else {
        DocOutput::Tree(documentation.clone())
    }
}

/// Render and write the output file, returning the number of bytes written.
pub fn write_output(config: &PropdocConfig, output: &DocOutput) -> Result<u64> {
    let options = JsonOptions {
        pretty: config.pretty,
        module: config.module,
    };
    let rendered = render_json(output, &options)?;
    write_file(&config.output, &rendered)?;
    Ok(rendered.len() as u64)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_path(path)
        .with_hint("Check that the output directory exists and is writable")
}

fn generate(config: &PropdocConfig, require_inputs: bool) -> Result<BuildReport> {
    let started = Instant::now();
    let report = build_documentation(config);

    if require_inputs && report.files_scanned == 0 {
        return Err(CliError::NoInputs);
    }

    let document = output_document(config, &report.documentation);
    let bytes = write_output(config, &document)?;

    ui::success(&ui::format_build_summary(
        report.documentation.len(),
        report.files_scanned,
        &config.output,
        bytes,
        started.elapsed(),
    ));
    Ok(report)
}

/// Build once and write the output.
///
/// Fails with [`CliError::NoInputs`] when no file could be read, in which case
/// nothing is written.
pub fn execute(config: &PropdocConfig) -> Result<BuildReport> {
    generate(config, true)
}

/// Build once and write the output, even when no file could be read.
///
/// Used by watch mode, where inputs may appear later.
pub fn rebuild(config: &PropdocConfig) -> Result<BuildReport> {
    generate(config, false)
}
