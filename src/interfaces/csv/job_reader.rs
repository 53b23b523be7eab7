use crate::domain::job::JobDraft;
use crate::error::{CalcError, Result};
use std::io::Read;

/// Reads job drafts from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<JobDraft>`. It handles whitespace trimming automatically.
/// Expected header: `name,hoursPerDay,totalHours`. Drafts still pass
/// through the engine's creation gate, so invalid rows that parse are
/// dropped there rather than here.
pub struct JobReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> JobReader<R> {
    /// Creates a new `JobReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes job drafts.
    pub fn drafts(self) -> impl Iterator<Item = Result<JobDraft>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CalcError::from))
    }
}
