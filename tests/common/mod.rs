use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_payments_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["amount", "payment_date", "month"])?;

    for _ in 0..rows {
        wtr.write_record(["1", "2024-01-15", ""])?;
    }

    wtr.flush()?;
    Ok(())
}
