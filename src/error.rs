//! Error enum
use std::fmt;
use std::path::PathBuf;

use crate::download;
use crate::transformers::ScanError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Markup(ScanError),
    Download(download::Error),
    MissingInput(PathBuf),
    NoRecords,
    InvalidRecord(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Markup(e) => write!(f, "markup error: {}", e),
            Error::Download(e) => write!(f, "download error: {:?}", e),
            Error::MissingInput(p) => write!(f, "input does not exist: {:?}", p),
            Error::NoRecords => write!(f, "no records were produced"),
            Error::InvalidRecord(reason) => write!(f, "invalid record: {}", reason),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Error {
        Error::Markup(e)
    }
}

impl From<download::Error> for Error {
    fn from(e: download::Error) -> Error {
        Error::Download(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
