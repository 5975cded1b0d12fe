use crate::domain::contract::ContractTerms;
use crate::domain::money::Amount;
use crate::error::{BillingError, Result};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month's due payment within a contract's plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based position within the schedule.
    pub month_number: u32,
    /// Serialized as `payment_date`, the name existing consumers read.
    #[serde(rename = "payment_date")]
    pub due_date: NaiveDate,
    pub monthly_fee: Amount,
}

impl ScheduleEntry {
    /// Display label for the entry's month, e.g. "February 2024".
    pub fn label(&self) -> String {
        self.due_date.format("%B %Y").to_string()
    }
}

/// Ordered monthly payment schedule derived from contract terms.
///
/// Entries are ascending by `month_number` with strictly ascending due
/// dates; the sequence length equals the contract's month count.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Derives the schedule for the given terms.
    ///
    /// Due date `n` is the start date advanced by `n - 1` calendar months.
    /// Every due date is computed from the original start date, so a start
    /// day missing from a target month clamps to that month's last day
    /// without drifting the months after it (Jan 31 -> Feb 28/29 -> Mar 31).
    pub fn generate(terms: &ContractTerms) -> Result<Self> {
        let mut entries = Vec::with_capacity(terms.months() as usize);
        for n in 1..=terms.months() {
            let due_date = terms
                .start_date()
                .checked_add_months(Months::new(n - 1))
                .ok_or_else(|| {
                    BillingError::InvalidArgument(format!(
                        "due date for month {n} is out of the supported date range"
                    ))
                })?;
            entries.push(ScheduleEntry {
                month_number: n,
                due_date,
                monthly_fee: terms.fee_for(n),
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn months(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn total_fee(&self) -> Decimal {
        self.entries.iter().map(|e| e.monthly_fee.value()).sum()
    }
}
