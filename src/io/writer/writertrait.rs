use crate::error::Error;

/// Persistence end of the pipeline.
pub trait RecordSink {
    type Item;

    /// Writes a single record. A failure concerns that record only.
    fn write_single(&mut self, record: &Self::Item) -> Result<(), Error>;

    fn write(&mut self, records: &[Self::Item]) -> Result<(), Error> {
        for record in records {
            self.write_single(record)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error>;
}
