use crate::domain::money::Amount;
use crate::domain::schedule::{Schedule, ScheduleEntry};
use crate::error::{BillingError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment recorded against a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub amount: Amount,
    pub payment_date: NaiveDate,
    /// 1-based month the payer named, if any. Unlinked payments settle the
    /// oldest outstanding month.
    #[serde(default)]
    pub month: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaidStatus {
    Unpaid,
    Paid,
}

/// A schedule entry together with its reconciled payment state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledEntry {
    #[serde(flatten)]
    pub entry: ScheduleEntry,
    #[serde(rename = "payment_status")]
    pub status: PaidStatus,
    /// Allocated toward this month. Normally at most the monthly fee; the
    /// final month carries any overpayment beyond the contract total.
    #[serde(rename = "amount_paid")]
    pub amount_paid: Decimal,
}

/// Aggregate state of a reconciled plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStatistics {
    pub total_months: u32,
    pub paid_months: u32,
    pub unpaid_months: u32,
    pub total_fee: Decimal,
    pub total_paid: Decimal,
    pub remaining_amount: Decimal,
    pub completion_percentage: Decimal,
}

impl PlanStatistics {
    fn summarize(entries: &[ReconciledEntry], payments: &[PaymentRecord]) -> Self {
        let total_months = entries.len() as u32;
        let paid_months = entries
            .iter()
            .filter(|e| e.status == PaidStatus::Paid)
            .count() as u32;
        let total_fee: Decimal = entries.iter().map(|e| e.entry.monthly_fee.value()).sum();
        let total_paid: Decimal = payments.iter().map(|p| p.amount.value()).sum();

        let mut completion_percentage = if total_fee.is_zero() {
            Decimal::ZERO
        } else {
            (total_paid / total_fee * Decimal::ONE_HUNDRED)
                .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        };
        completion_percentage.rescale(2);

        Self {
            total_months,
            paid_months,
            unpaid_months: total_months - paid_months,
            total_fee,
            total_paid,
            remaining_amount: (total_fee - total_paid).max(Decimal::ZERO),
            completion_percentage,
        }
    }
}

/// A fully reconciled payment plan in the shape existing consumers read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    #[serde(rename = "schedule")]
    pub entries: Vec<ReconciledEntry>,
    pub statistics: PlanStatistics,
}

impl PaymentPlan {
    /// Reconciles recorded payments against a schedule.
    ///
    /// Allocation is FIFO over due dates: each payment settles the oldest
    /// month with an outstanding balance, excess carrying over to the next
    /// one. A payment linked to a specific month is applied there first,
    /// its excess carrying forward from the following month. Excess beyond
    /// the final month accrues on the final entry. Payments are processed
    /// oldest payment date first (ties keep input order), so the result
    /// does not depend on how the caller ordered the list.
    pub fn reconcile(schedule: &Schedule, payments: &[PaymentRecord]) -> Result<Self> {
        let months = schedule.months() as usize;
        let entries = schedule.entries();
        let mut allocated = vec![Decimal::ZERO; months];

        let mut ordered: Vec<&PaymentRecord> = payments.iter().collect();
        ordered.sort_by_key(|p| p.payment_date);

        // First month with an outstanding balance. Allocations only grow,
        // so it only ever moves forward.
        let mut oldest_open = 0usize;

        for payment in ordered {
            let start = match payment.month {
                Some(m) if m == 0 || m as usize > months => {
                    return Err(BillingError::InvalidArgument(format!(
                        "payment month {m} is outside the schedule (1..={months})"
                    )));
                }
                Some(m) => (m - 1) as usize,
                None => oldest_open,
            };

            let mut left = payment.amount.value();
            for i in start..months {
                if left.is_zero() {
                    break;
                }
                let due = entries[i].monthly_fee.value() - allocated[i];
                if due <= Decimal::ZERO {
                    continue;
                }
                let applied = left.min(due);
                allocated[i] += applied;
                left -= applied;
            }
            if !left.is_zero()
                && let Some(last) = allocated.last_mut()
            {
                *last += left;
            }

            while oldest_open < months
                && allocated[oldest_open] >= entries[oldest_open].monthly_fee.value()
            {
                oldest_open += 1;
            }
        }

        let entries: Vec<ReconciledEntry> = entries
            .iter()
            .zip(&allocated)
            .map(|(entry, paid)| ReconciledEntry {
                entry: entry.clone(),
                status: if *paid >= entry.monthly_fee.value() {
                    PaidStatus::Paid
                } else {
                    PaidStatus::Unpaid
                },
                amount_paid: *paid,
            })
            .collect();

        let statistics = PlanStatistics::summarize(&entries, payments);
        Ok(Self {
            entries,
            statistics,
        })
    }
}
