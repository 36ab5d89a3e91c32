use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info_span, warn};

use super::{LocationStyle, ReadErrorPolicy, RunContext};
use crate::aggregation::RecordStore;
use crate::core::ElementRecord;
use crate::errors::{Error, Result};
use crate::extraction::{Extractor, MarkupScanner};
use crate::io::read_document;

/// How a corpus on disk is read and extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusOptions {
    pub location_style: LocationStyle,
    pub read_error_policy: ReadErrorPolicy,
    pub parallel: bool,
    /// Worker threads for parallel extraction; 0 uses one per CPU
    pub jobs: usize,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            location_style: LocationStyle::Full,
            read_error_policy: ReadErrorPolicy::Abort,
            parallel: true,
            jobs: 0,
        }
    }
}

/// Read and extract every path, then feed the batches into `context`.
///
/// Batches are ingested in the order of `paths` regardless of which worker
/// produced them. Under [`ReadErrorPolicy::Abort`] the first unreadable
/// document fails the call and nothing is ingested.
pub fn scan_corpus<M, S>(
    paths: &[PathBuf],
    extractor: &Extractor<M>,
    options: &CorpusOptions,
    context: &mut RunContext<S>,
    progress: &ProgressBar,
) -> Result<()>
where
    M: MarkupScanner,
    S: RecordStore,
{
    let _span = info_span!("scan_corpus", documents = paths.len()).entered();

    let load = |path: &PathBuf| -> Result<Option<Vec<ElementRecord>>> {
        let outcome = read_document(path).map(|text| {
            let location = options.location_style.render(path);
            extractor.extract(&text, &location)
        });
        progress.inc(1);

        match outcome {
            Ok(records) => {
                debug!(path = %path.display(), records = records.len(), "Scanned document");
                Ok(Some(records))
            }
            Err(err) if options.read_error_policy == ReadErrorPolicy::Skip => {
                warn!("Skipping unreadable document: {}", err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    };

    let batches: Vec<Option<Vec<ElementRecord>>> = if options.parallel && paths.len() > 1 {
        let pool = worker_pool(options.jobs)?;
        pool.install(|| paths.par_iter().map(&load).collect::<Result<Vec<_>>>())?
    } else {
        paths.iter().map(&load).collect::<Result<Vec<_>>>()?
    };

    for batch in batches {
        match batch {
            Some(records) => context.ingest(records),
            None => context.record_skipped(),
        }
    }

    Ok(())
}

/// Dedicated pool for one scan; `jobs == 0` sizes it to the CPU count.
fn worker_pool(jobs: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| Error::worker_pool(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::Thresholds;
    use std::fs;
    use tempfile::TempDir;

    fn corpus(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
        let dir = TempDir::new().unwrap();
        let paths = files
            .iter()
            .map(|(name, content)| {
                let path = dir.path().join(name);
                fs::write(&path, content).unwrap();
                path
            })
            .collect();
        (dir, paths)
    }

    fn run(paths: &[PathBuf], options: CorpusOptions) -> Result<RunContext> {
        let mut context = RunContext::new();
        scan_corpus(
            paths,
            &Extractor::default(),
            &options,
            &mut context,
            &ProgressBar::hidden(),
        )?;
        Ok(context)
    }

    #[test]
    fn test_worker_pool_sizes() {
        assert_eq!(worker_pool(3).unwrap().current_num_threads(), 3);
        assert!(worker_pool(0).unwrap().current_num_threads() >= 1);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let (_dir, paths) = corpus(&[
            ("a.html", r#"<div class="x y"></div><div class="z"></div>"#),
            ("b.html", r#"<div class="y x"></div>"#),
            ("c.html", r#"<div class="z"></div><div class="z"></div>"#),
        ]);
        let sequential = run(
            &paths,
            CorpusOptions {
                parallel: false,
                ..Default::default()
            },
        )
        .unwrap()
        .finish(&Thresholds::default());
        let parallel = run(
            &paths,
            CorpusOptions {
                parallel: true,
                jobs: 2,
                ..Default::default()
            },
        )
        .unwrap()
        .finish(&Thresholds::default());
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.1.documents_scanned, 3);
    }

    #[test]
    fn test_basename_locations() {
        let (_dir, paths) = corpus(&[
            ("a.html", r#"<div class="k"></div>"#),
            ("b.html", r#"<div class="k"></div>"#),
        ]);
        let (groups, _) = run(
            &paths,
            CorpusOptions {
                location_style: LocationStyle::Basename,
                ..Default::default()
            },
        )
        .unwrap()
        .finish(&Thresholds::default());
        let locations: Vec<&str> = groups[0].locations.iter().map(String::as_str).collect();
        assert_eq!(locations, vec!["a.html", "b.html"]);
    }

    #[test]
    fn test_abort_policy_fails_on_missing_document() {
        let (dir, mut paths) = corpus(&[("a.html", r#"<div class="k"></div>"#)]);
        paths.push(dir.path().join("gone.html"));
        let err = run(&paths, CorpusOptions::default()).err().unwrap();
        assert!(matches!(err, Error::DocumentRead { .. }));
    }

    #[test]
    fn test_skip_policy_continues() {
        let (dir, mut paths) = corpus(&[
            ("a.html", r#"<div class="k"></div>"#),
            ("b.html", r#"<div class="k"></div>"#),
        ]);
        paths.insert(1, dir.path().join("gone.html"));
        let context = run(
            &paths,
            CorpusOptions {
                read_error_policy: ReadErrorPolicy::Skip,
                ..Default::default()
            },
        )
        .unwrap();
        let (groups, summary) = context.finish(&Thresholds::default());
        assert_eq!(summary.documents_scanned, 2);
        assert_eq!(summary.documents_skipped, 1);
        assert_eq!(groups[0].occurrence_count, 2);
    }

    #[test]
    fn test_invalid_utf8_is_a_read_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.html");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x3c]).unwrap();
        let err = run(&[path], CorpusOptions::default()).err().unwrap();
        assert!(matches!(err, Error::DocumentRead { .. }));
    }
}
