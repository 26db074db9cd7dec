/*! JSONL record writer.

Records are written one per line, in compact JSON, to a file opened in append mode.
Records that do not follow the record rules (see [check_record]) are refused.
!*/
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::pipelines::wikiclean::NormalizedArticle;

use super::RecordSink;

/// Minimum trimmed length of a record's text.
pub const MIN_TEXT_CHARS: usize = 50;

/// Checks the rules every persisted record must follow.
pub fn check_record(text: &str, title: &str) -> Result<(), Error> {
    let chars = text.trim().chars().count();
    if chars < MIN_TEXT_CHARS {
        return Err(Error::InvalidRecord(format!(
            "text is too short ({} < {} chars)",
            chars, MIN_TEXT_CHARS
        )));
    }

    if title.trim().is_empty() {
        return Err(Error::InvalidRecord("empty title".to_string()));
    }

    Ok(())
}

pub struct JsonlWriter<W: Write> {
    handle: W,
}

impl JsonlWriter<BufWriter<File>> {
    /// Opens `dst` for appending, creating it if needed.
    pub fn open(dst: &Path) -> Result<Self, Error> {
        let file = OpenOptions::new().create(true).append(true).open(dst)?;
        debug!("appending records to {:?}", dst);
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(handle: W) -> Self {
        Self { handle }
    }

    pub fn into_inner(self) -> W {
        self.handle
    }
}

impl<W: Write> RecordSink for JsonlWriter<W> {
    type Item = NormalizedArticle;

    fn write_single(&mut self, record: &NormalizedArticle) -> Result<(), Error> {
        check_record(record.text(), record.meta().title())?;

        // serialize first, so that a failure never leaves half a line behind
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        self.handle.write_all(&line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    use super::{JsonlWriter, MIN_TEXT_CHARS};
    use crate::error::Error;
    use crate::io::writer::RecordSink;
    use crate::pipelines::wikiclean::{Metadata, NormalizedArticle};

    fn record(title: &str, text: &str) -> NormalizedArticle {
        let meta = Metadata::new(
            title.to_string(),
            1000,
            "src".to_string(),
            Some("1".to_string()),
            None,
            None,
        );
        NormalizedArticle::new(text.to_string(), meta)
    }

    #[test]
    fn write_lines() {
        let mut w = JsonlWriter::new(Vec::new());
        let text = "长".repeat(MIN_TEXT_CHARS);
        w.write(&[record("甲", &text), record("乙", &text)]).unwrap();
        w.flush().unwrap();

        let out = String::from_utf8(w.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let back: NormalizedArticle = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(back, record("乙", &text));
        // no escaping of non-ascii characters
        assert!(lines[0].contains("长长长"));
    }

    #[test]
    fn refuse_invalid_records() {
        let mut w = JsonlWriter::new(Vec::new());
        let short = format!("   {}   ", "长".repeat(MIN_TEXT_CHARS - 1));
        assert!(matches!(
            w.write_single(&record("甲", &short)),
            Err(Error::InvalidRecord(_))
        ));
        assert!(matches!(
            w.write_single(&record(" ", &"长".repeat(MIN_TEXT_CHARS))),
            Err(Error::InvalidRecord(_))
        ));
        assert!(w.into_inner().is_empty());
    }

    #[test]
    fn append_mode() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("out.jsonl");
        let text = "长".repeat(MIN_TEXT_CHARS);

        for title in ["甲", "乙"] {
            let mut w = JsonlWriter::open(&path).unwrap();
            w.write_single(&record(title, &text)).unwrap();
            w.flush().unwrap();
        }

        let f = BufReader::new(File::open(&path).unwrap());
        assert_eq!(f.lines().count(), 2);
    }
}
