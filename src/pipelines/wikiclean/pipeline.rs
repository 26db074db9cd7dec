//! Wikipedia dump cleaning pipeline
//!
//! Turns a MediaWiki XML export into a JSONL corpus of cleaned articles.
//!
//! # Processing
//! 1. The dump is decompressed and decoded as a stream. Pages failing the structural
//!    test (redirects, disambiguations, non-article namespaces, short or empty pages)
//!    never leave the decoder.
//! 1. Each remaining page is stripped of its markup, paragraph by paragraph. If the markup
//!    cannot be parsed, a naive cleaner is used instead.
//! 1. The cleaned text goes through the article gate.
//! 1. Accepted articles get their metadata and are appended to the output file.
//!
//! Pages are processed one at a time, in dump order. The run stops at the end of the dump,
//! after `max_articles` records or on a user interrupt, whichever comes first.
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};

use crate::error::Error;
use crate::filtering::{PageFilter, Thresholds};
use crate::io::writer::{JsonlWriter, RecordSink};
use crate::pipelines::pipeline::Pipeline;
use crate::sources::{RawArticle, WikiDump};
use crate::transformers::Tier;

use super::article::{ArticleProcessor, Outcome, Verdict};
use super::stats::PipelineStats;
use super::types::NormalizedArticle;

/// Name of the output file, in the output directory.
pub const OUTPUT_FILE: &str = "cleaned_wikipedia.jsonl";

const PROGRESS_EVERY: u64 = 1000;

pub struct WikiClean {
    src: PathBuf,
    dst: PathBuf,
    max_articles: Option<u64>,
    thresholds: Thresholds,
    source: String,
    interrupted: Arc<AtomicBool>,
}

impl WikiClean {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        max_articles: Option<u64>,
        thresholds: Thresholds,
        source: String,
    ) -> Self {
        debug!("using thresholds {:?}", thresholds);
        Self {
            src,
            dst,
            max_articles,
            thresholds,
            source,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.dst.join(OUTPUT_FILE)
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    /// Setting the returned flag stops the run before the next page is pulled.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    fn limit_reached(&self, written: u64) -> bool {
        self.max_articles.map_or(false, |max| written >= max)
    }

    /// Process pages until exhaustion, interruption or limit, writing accepted articles to `sink`.
    ///
    /// Processing and write errors only affect the current page.
    pub fn process<I, S>(&self, mut pages: I, sink: &mut S) -> PipelineStats
    where
        I: Iterator<Item = RawArticle>,
        S: RecordSink<Item = NormalizedArticle>,
    {
        let processor = ArticleProcessor::new(&self.thresholds, self.source.clone());
        let mut stats = PipelineStats::default();
        let start = Instant::now();

        loop {
            if self.interrupted.load(Ordering::Relaxed) {
                warn!("interrupted, stopping after {} pages", stats.processed);
                stats.interrupted = true;
                break;
            }

            if self.limit_reached(stats.written) {
                info!("reached the limit of {} articles", stats.written);
                break;
            }

            let page = match pages.next() {
                Some(page) => page,
                None => break,
            };
            stats.processed += 1;

            match processor.process(&page) {
                Ok(Outcome { tier, verdict }) => {
                    if tier == Tier::Fallback {
                        stats.fallback += 1;
                    }

                    match verdict {
                        Verdict::Accepted(record) => match sink.write_single(&record) {
                            Ok(()) => stats.written += 1,
                            Err(e) => {
                                warn!("could not write {:?}: {}", page.title(), e);
                                stats.skipped += 1;
                            }
                        },
                        Verdict::Rejected(rejection) => {
                            debug!("rejected {:?}: {}", page.title(), rejection);
                            stats.reject(rejection);
                        }
                    }
                }
                Err(e) => {
                    warn!("could not process {:?}: {}", page.title(), e);
                    stats.skipped += 1;
                }
            }

            if stats.processed % PROGRESS_EVERY == 0 {
                info!(
                    "processed {} pages, written {}, filtered {}, skipped {}",
                    stats.processed, stats.written, stats.filtered, stats.skipped
                );
            }
        }

        stats.elapsed = start.elapsed();
        stats
    }
}

impl Pipeline<PipelineStats> for WikiClean {
    fn run(&self) -> Result<PipelineStats, Error> {
        if !self.src.exists() {
            return Err(Error::MissingInput(self.src.clone()));
        }

        std::fs::create_dir_all(&self.dst)?;

        let mut dump = WikiDump::from_path(&self.src, PageFilter::new(&self.thresholds))?;
        let output = self.output_path();
        let mut sink = JsonlWriter::open(&output)?;

        info!("cleaning {:?} into {:?}", self.src, output);
        let mut stats = self.process(dump.by_ref(), &mut sink);
        sink.flush()?;

        stats.decoder = dump.stats().clone();
        stats.output_size = std::fs::metadata(&output).ok().map(|m| m.len());

        info!(
            "done: {} pages read, {} processed, {} written",
            stats.decoder.pages, stats.processed, stats.written
        );
        Ok(stats)
    }
}
