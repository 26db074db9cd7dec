/*! Corpus processing

Operations on an already written corpus: sampling and validation.
!*/
pub mod sample;
pub mod validate;

pub use sample::{sample, sample_path};
pub use validate::{validate, ValidationReport};
