//! # wikiclean
//!
//! Turns a Chinese Wikipedia dump into a JSONL corpus.
//!
//! ## Getting started
//!
//! ```sh
//! wikiclean 0.1.0
//! Chinese Wikipedia corpus cleaning tool.
//!
//! USAGE:
//!     wikiclean <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     download    Download Wikipedia dump files
//!     help        Prints this message or the help of the given subcommand(s)
//!     process     Clean a dump into a JSONL corpus
//!     sample      Copy the first valid records of a corpus
//!     validate    Check that every line of a corpus is a valid record
//! ```
use std::sync::atomic::Ordering;

use structopt::StructOpt;

use wikiclean::download::{Downloader, DUMP_FILES};
use wikiclean::error::Error;
use wikiclean::filtering::Thresholds;
use wikiclean::pipelines::{Pipeline, WikiClean};
use wikiclean::processing::{self, ValidationReport};

#[macro_use]
extern crate log;

mod cli;

fn print_report(report: &ValidationReport) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::WikiClean::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::WikiClean::Download(d) => {
            let files: Vec<String> = if d.files.is_empty() {
                DUMP_FILES.iter().map(|f| f.to_string()).collect()
            } else {
                d.files
            };

            let dl = Downloader::new(&d.base_url)?;
            let results = dl.download_all(&files, &d.dst).await;

            let failures = results.iter().filter(|r| r.is_err()).count();
            if failures > 0 {
                return Err(Error::Custom(format!(
                    "{}/{} downloads failed",
                    failures,
                    results.len()
                )));
            }
        }

        cli::WikiClean::Process(p) => {
            let thresholds = match &p.thresholds {
                Some(path) => Thresholds::from_path(path)?,
                None => Thresholds::default(),
            };

            let pipeline = WikiClean::new(p.src, p.output_dir.clone(), p.max_articles, thresholds, p.source);
            let output = pipeline.output_path();

            // stop at the next page boundary on ctrl-c
            let interrupted = pipeline.interrupt_handle();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("interrupt received, finishing current page");
                    interrupted.store(true, Ordering::Relaxed);
                }
            });

            let stats = tokio::task::spawn_blocking(move || pipeline.run())
                .await
                .map_err(|e| Error::Custom(e.to_string()))??;

            if stats.written == 0 {
                println!("{}", stats);
                return Err(Error::NoRecords);
            }

            let report = processing::validate(&output)?;
            print_report(&report)?;

            let sample_path = processing::sample_path(&p.output_dir, p.sample);
            processing::sample(&output, &sample_path, p.sample)?;

            println!("{}", stats);

            if !report.valid {
                return Err(Error::Custom(format!("validation of {:?} failed", output)));
            }
        }

        cli::WikiClean::Sample(s) => {
            let written = processing::sample(&s.src, &s.dst, s.size)?;
            println!("created sample file with {} records: {:?}", written, s.dst);
        }

        cli::WikiClean::Validate(v) => {
            let report = processing::validate(&v.src)?;
            print_report(&report)?;
            if !report.valid {
                return Err(Error::Custom(format!("validation of {:?} failed", v.src)));
            }
        }
    };
    Ok(())
}
