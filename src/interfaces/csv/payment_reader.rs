use crate::domain::plan::PaymentRecord;
use crate::error::{BillingError, Result};
use std::io::Read;

/// Reads payment records from a CSV source.
///
/// Expected columns: `amount, payment_date, month` — `month` may be empty
/// for payments that are not tied to a specific month. The reader wraps
/// `csv::Reader`, trims whitespace, and tolerates flexible record lengths.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes payments.
    ///
    /// Each row yields its own `Result`, so one malformed row does not
    /// abort the rest of the stream.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BillingError::from))
    }
}
