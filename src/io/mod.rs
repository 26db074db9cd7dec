/*!
# IO utilities

Corpus saving ([writer]) and loading ([reader]).
!*/
pub mod reader;
pub mod writer;

pub use reader::RecordReader;
pub use writer::{JsonlWriter, RecordSink};
