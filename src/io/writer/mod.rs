/*!
# Record writing

[RecordSink] is the persistence end of the pipeline, [JsonlWriter] its JSONL implementation.
!*/
mod jsonl;
mod writertrait;

pub use jsonl::{check_record, JsonlWriter, MIN_TEXT_CHARS};
pub use writertrait::RecordSink;
