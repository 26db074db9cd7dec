//! Output validation.
//!
//! Goes through a JSONL corpus and checks that each line is a well-formed record.
//! The error list is capped at [MAX_ERRORS] entries, but every line is checked.
use std::path::Path;

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::io::reader::{RecordLine, RecordReader};
use crate::io::writer;
use crate::pipelines::wikiclean::metadata::MAX_CATEGORIES;

pub const MAX_ERRORS: usize = 10;
pub const TRUNCATION_MARKER: &str = "... (truncated, too many errors)";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub total_lines: u64,
    pub valid_records: u64,
    pub invalid_records: u64,
    pub errors: Vec<String>,
    /// `true` if errors were left out of `errors`
    pub truncated: bool,
}

impl ValidationReport {
    fn push_error(&mut self, error: String) {
        self.invalid_records += 1;
        if self.errors.len() < MAX_ERRORS {
            self.errors.push(error);
        } else if !self.truncated {
            self.truncated = true;
            self.errors.push(TRUNCATION_MARKER.to_string());
        }
    }
}

/// Checks a parsed line against the record schema.
pub fn check_record(value: &Value) -> Result<(), String> {
    let record = value.as_object().ok_or("record is not an object")?;

    let text = record
        .get("text")
        .and_then(Value::as_str)
        .ok_or("missing or non-string text")?;
    let meta = record
        .get("meta")
        .and_then(Value::as_object)
        .ok_or("missing or non-object meta")?;
    let title = meta
        .get("title")
        .and_then(Value::as_str)
        .ok_or("missing or non-string meta.title")?;

    writer::check_record(text, title).map_err(|e| e.to_string())?;

    meta.get("char_count")
        .and_then(Value::as_u64)
        .ok_or("missing or invalid meta.char_count")?;
    meta.get("source")
        .and_then(Value::as_str)
        .ok_or("missing or non-string meta.source")?;

    for key in ["page_id", "timestamp"] {
        if meta.get(key).map_or(false, |v| !v.is_string()) {
            return Err(format!("meta.{} is not a string", key));
        }
    }

    if let Some(categories) = meta.get("categories") {
        let categories = categories
            .as_array()
            .ok_or("meta.categories is not an array")?;
        if categories.len() > MAX_CATEGORIES {
            return Err(format!(
                "too many categories ({} > {})",
                categories.len(),
                MAX_CATEGORIES
            ));
        }
        if !categories.iter().all(Value::is_string) {
            return Err("meta.categories holds non-string values".to_string());
        }
    }

    Ok(())
}

/// Validates lines coming from a [crate::io::reader::Reader].
pub fn validate_lines<I>(lines: I) -> Result<ValidationReport, Error>
where
    I: Iterator<Item = Result<RecordLine, Error>>,
{
    let mut report = ValidationReport::default();

    for line in lines {
        let line = line?;
        report.total_lines += 1;

        let error = match &line.parsed {
            Ok(value) => check_record(value)
                .err()
                .map(|reason| format!("Line {}: Invalid record format ({})", line.number, reason)),
            Err(e) => Some(format!("Line {}: JSON decode error - {}", line.number, e)),
        };

        match error {
            Some(error) => {
                debug!("{}", error);
                report.push_error(error);
            }
            None => report.valid_records += 1,
        }
    }

    report.valid = report.invalid_records == 0;
    Ok(report)
}

pub fn validate(src: &Path) -> Result<ValidationReport, Error> {
    if !src.exists() {
        return Err(Error::MissingInput(src.to_path_buf()));
    }

    let report = validate_lines(RecordReader::from_path(src)?)?;
    info!(
        "validated {:?}: {} valid, {} invalid",
        src, report.valid_records, report.invalid_records
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{check_record, validate, validate_lines, MAX_ERRORS, TRUNCATION_MARKER};
    use crate::error::Error;
    use crate::io::reader::Reader;

    fn text() -> String {
        "长江是亚洲第一长河，".repeat(6)
    }

    fn record() -> serde_json::Value {
        json!({
            "text": text(),
            "meta": {
                "title": "长江",
                "char_count": 1200,
                "source": "zh_wikipedia_20250201",
                "page_id": "42",
                "categories": ["河流"],
            }
        })
    }

    #[test]
    fn valid_record() {
        assert_eq!(check_record(&record()), Ok(()));
    }

    #[test]
    fn invalid_records() {
        let mut r = record();
        r["text"] = json!("太短");
        assert!(check_record(&r).is_err());

        let mut r = record();
        r["meta"]["title"] = json!(12);
        assert!(check_record(&r).is_err());

        let mut r = record();
        r["meta"]["char_count"] = json!(-1);
        assert!(check_record(&r).is_err());

        let mut r = record();
        r["meta"]["page_id"] = json!(42);
        assert!(check_record(&r).is_err());

        let mut r = record();
        r["meta"]["categories"] = json!(["一", "二", "三", "四", "五", "六"]);
        assert!(check_record(&r).is_err());

        assert!(check_record(&json!([1, 2])).is_err());
    }

    #[test]
    fn report() {
        let data = format!("{}\nnot json\n{}\n", record(), json!({"text": text()}));
        let report = validate_lines(Reader::new(data.as_bytes())).unwrap();

        assert!(!report.valid);
        assert_eq!(report.total_lines, 3);
        assert_eq!(report.valid_records, 1);
        assert_eq!(report.invalid_records, 2);
        assert!(report.errors[0].starts_with("Line 2: JSON decode error"));
        assert!(report.errors[1].starts_with("Line 3: Invalid record format"));
        assert!(!report.truncated);
    }

    #[test]
    fn error_list_is_capped() {
        let mut data = "garbage\n".repeat(25);
        data.push_str(&format!("{}\n", record()));
        let report = validate_lines(Reader::new(data.as_bytes())).unwrap();

        // scanning goes on after the list is full
        assert_eq!(report.total_lines, 26);
        assert_eq!(report.invalid_records, 25);
        assert_eq!(report.valid_records, 1);
        assert!(report.truncated);
        assert_eq!(report.errors.len(), MAX_ERRORS + 1);
        assert_eq!(report.errors.last().unwrap(), TRUNCATION_MARKER);
    }

    #[test]
    fn invalid_utf8_line() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.jsonl");
        let mut data = format!("{}\n", record()).into_bytes();
        data.extend_from_slice(b"{\"text\": \"\xff\xfe\"}\n");
        data.extend_from_slice(format!("{}\n", record()).as_bytes());
        std::fs::write(&src, data).unwrap();

        let report = validate(&src).unwrap();
        assert!(!report.valid);
        assert_eq!(report.total_lines, 3);
        assert_eq!(report.valid_records, 2);
        assert_eq!(report.invalid_records, 1);
        assert!(report.errors[0].starts_with("Line 2:"));
    }

    #[test]
    fn missing_file() {
        let dst = tempfile::tempdir().unwrap();
        let r = validate(&dst.path().join("nope.jsonl"));
        assert!(matches!(r, Err(Error::MissingInput(_))));
    }
}
