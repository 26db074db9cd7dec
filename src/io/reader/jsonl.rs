/*! Line-by-line JSONL reader.

Yields every line with its number, and the outcome of parsing it as JSON.
A line that is not valid UTF-8 or not valid JSON is not an error of the reader:
it is up to the caller to skip it or report it.
Only failing reads are.
!*/
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Split};
use std::path::Path;
use std::string::FromUtf8Error;

use serde_json::Value;

use crate::error::Error;

/// Reason why a line could not be parsed.
#[derive(Debug)]
pub enum LineError {
    Utf8(FromUtf8Error),
    Json(serde_json::Error),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Utf8(e) => write!(f, "invalid UTF-8 ({})", e),
            LineError::Json(e) => e.fmt(f),
        }
    }
}

/// A line of a JSONL file.
#[derive(Debug)]
pub struct RecordLine {
    /// 1-based line number
    pub number: usize,
    /// line content, lossily decoded if it is not valid UTF-8
    pub raw: String,
    pub parsed: Result<Value, LineError>,
}

#[derive(Debug)]
pub struct Reader<T>
where
    T: Read,
{
    lines: Split<BufReader<T>>,
    number: usize,
}

pub type RecordReader = Reader<File>;

impl RecordReader {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let f = File::open(src)?;
        Ok(Self::new(f))
    }
}

impl<T> Reader<T>
where
    T: Read,
{
    pub fn new(inner: T) -> Self {
        Self {
            lines: BufReader::new(inner).split(b'\n'),
            number: 0,
        }
    }
}

impl<T> Iterator for Reader<T>
where
    T: Read,
{
    type Item = Result<RecordLine, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bytes = match self.lines.next()? {
            Ok(bytes) => bytes,
            Err(e) => return Some(Err(Error::Io(e))),
        };
        self.number += 1;

        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let (raw, parsed) = match String::from_utf8(bytes) {
            Ok(raw) => {
                let parsed = serde_json::from_str(raw.trim()).map_err(LineError::Json);
                (raw, parsed)
            }
            Err(e) => (
                String::from_utf8_lossy(e.as_bytes()).into_owned(),
                Err(LineError::Utf8(e)),
            ),
        };
        Some(Ok(RecordLine {
            number: self.number,
            raw,
            parsed,
        }))
    }
}
