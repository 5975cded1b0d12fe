use crate::domain::plan::{PaidStatus, PaymentPlan};
use crate::error::Result;
use std::io::Write;

/// Writes a reconciled plan as CSV: one row per scheduled month, then the
/// aggregate statistics as a second table.
pub struct PlanWriter<W: Write> {
    inner: W,
}

impl<W: Write> PlanWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_plan(&mut self, plan: &PaymentPlan) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(&mut self.inner);
        wtr.write_record(["month", "label", "due_date", "fee", "status", "paid"])?;
        for entry in &plan.entries {
            let status = match entry.status {
                PaidStatus::Paid => "paid",
                PaidStatus::Unpaid => "unpaid",
            };
            wtr.write_record([
                entry.entry.month_number.to_string(),
                entry.entry.label(),
                entry.entry.due_date.to_string(),
                entry.entry.monthly_fee.value().to_string(),
                status.to_string(),
                entry.amount_paid.to_string(),
            ])?;
        }
        wtr.flush()?;
        drop(wtr);

        self.inner.write_all(b"\n")?;

        let stats = &plan.statistics;
        let mut wtr = csv::Writer::from_writer(&mut self.inner);
        wtr.write_record([
            "total_months",
            "paid_months",
            "unpaid_months",
            "total_fee",
            "total_paid",
            "remaining_amount",
            "completion_percentage",
        ])?;
        wtr.write_record([
            stats.total_months.to_string(),
            stats.paid_months.to_string(),
            stats.unpaid_months.to_string(),
            stats.total_fee.to_string(),
            stats.total_paid.to_string(),
            stats.remaining_amount.to_string(),
            stats.completion_percentage.to_string(),
        ])?;
        wtr.flush()?;

        Ok(())
    }
}
