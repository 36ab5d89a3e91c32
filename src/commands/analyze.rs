//! The `analyze` command.
//!
//! [`run_analysis`] does the work and returns data; [`handle_analyze`] is the
//! thin shell that renders it and talks to the user.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::AggregatedGroup;
use crate::config::AnalyzeConfig;
use crate::extraction::Extractor;
use crate::io::{DocumentWalker, FileDestination, OutputDestination, StdoutDestination};
use crate::output::render_report;
use crate::pipeline::{scan_corpus, RunContext, RunSummary};
use crate::progress::{ProgressConfig, ProgressManager, TEMPLATE_DOCUMENT_SCAN};

/// Result of scanning a corpus.
#[derive(Debug)]
pub enum AnalysisOutcome {
    Report {
        groups: Vec<AggregatedGroup>,
        summary: RunSummary,
    },
    /// The input directory held no matching documents.
    EmptyCorpus,
}

/// Walk, extract and aggregate without producing any output.
pub fn run_analysis(config: &AnalyzeConfig, quiet: bool) -> crate::errors::Result<AnalysisOutcome> {
    let paths = DocumentWalker::new(config.path.clone())
        .with_extensions(config.extensions.clone())
        .with_ignore_patterns(config.ignore.clone())
        .respect_gitignore(config.respect_gitignore)
        .walk()?;

    if paths.is_empty() {
        return Ok(AnalysisOutcome::EmptyCorpus);
    }

    let extractor = Extractor::new(config.element_kinds());
    let mut context = RunContext::new();
    let progress = ProgressManager::new(ProgressConfig::from_env(quiet))
        .create_bar(paths.len() as u64, TEMPLATE_DOCUMENT_SCAN);
    progress.set_message("Scanning");

    let scanned = scan_corpus(
        &paths,
        &extractor,
        &config.corpus_options(),
        &mut context,
        &progress,
    );
    progress.finish_and_clear();
    scanned?;

    let (groups, summary) = context.finish(&config.thresholds);
    info!(
        documents = summary.documents_scanned,
        skipped = summary.documents_skipped,
        records = summary.records,
        groups = summary.groups,
        "Analysis complete"
    );

    Ok(AnalysisOutcome::Report { groups, summary })
}

pub fn handle_analyze(config: AnalyzeConfig, quiet: bool) -> Result<()> {
    let groups = match run_analysis(&config, quiet)? {
        AnalysisOutcome::Report { groups, .. } => groups,
        AnalysisOutcome::EmptyCorpus => {
            println!(
                "no .{} files to analyze in the given directory.",
                config.extensions.join("/.")
            );
            return Ok(());
        }
    };

    let rendered = render_report(&groups, config.format)?;
    let destination: Box<dyn OutputDestination> = match &config.output {
        Some(path) => Box::new(FileDestination::new(path.clone())),
        None => Box::new(StdoutDestination::new()),
    };
    destination
        .write_bytes(&rendered)
        .with_context(|| format!("Failed to write report to {}", destination.description()))?;
    debug!(destination = %destination.description(), bytes = rendered.len(), "Report written");

    if let (Some(path), false) = (&config.output, quiet) {
        println!("Output file created at: {}", path.display());
    }

    Ok(())
}
