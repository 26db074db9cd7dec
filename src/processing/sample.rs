//! Corpus sampling.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Error;
use crate::io::reader::RecordReader;

use super::validate::check_record;

/// Default location of a sample of `size` records in `dir`.
pub fn sample_path(dir: &Path, size: usize) -> PathBuf {
    dir.join(format!("sample_{}.jsonl", size))
}

/// Copies the first `size` valid records of `src` into `dst`, overwriting it.
///
/// Malformed lines are skipped. Returns the number of copied records.
pub fn sample(src: &Path, dst: &Path, size: usize) -> Result<usize, Error> {
    if !src.exists() {
        return Err(Error::MissingInput(src.to_path_buf()));
    }

    if let Some(parent) = dst.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let reader = RecordReader::from_path(src)?;
    let mut out = BufWriter::new(File::create(dst)?);
    let mut written = 0;

    for line in reader {
        if written >= size {
            break;
        }

        let line = line?;
        match &line.parsed {
            Ok(value) => match check_record(value) {
                Ok(()) => {
                    writeln!(out, "{}", line.raw.trim())?;
                    written += 1;
                }
                Err(reason) => warn!("skipping line {}: {}", line.number, reason),
            },
            Err(e) => warn!("invalid JSON on line {}: {}", line.number, e),
        }
    }

    out.flush()?;
    info!("created sample file with {} records: {:?}", written, dst);
    Ok(written)
}
