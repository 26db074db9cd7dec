/*! Corpus reading utilities

Used by sampling and validation to go through an already written corpus.
!*/
mod jsonl;

pub use jsonl::{LineError, Reader, RecordLine, RecordReader};
