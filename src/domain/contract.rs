use crate::domain::money::Amount;
use crate::error::{BillingError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fee owed for each month of a contract.
///
/// Flat pricing is the default for hostel contracts; the per-month table
/// covers negotiated contracts where individual months differ (move-in
/// discounts, indexed fees).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeeSchedule {
    Flat { months: u32, monthly_fee: Amount },
    PerMonth(Vec<Amount>),
}

/// Validated terms of a single contract: when it starts and what each
/// month costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTerms {
    start_date: NaiveDate,
    fees: FeeSchedule,
}

impl ContractTerms {
    /// Terms with the same fee due every month.
    pub fn flat(start_date: NaiveDate, months: u32, monthly_fee: Amount) -> Result<Self> {
        if months == 0 {
            return Err(BillingError::InvalidArgument(
                "months must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            start_date,
            fees: FeeSchedule::Flat {
                months,
                monthly_fee,
            },
        })
    }

    /// Terms with an explicit fee for each month.
    pub fn per_month(start_date: NaiveDate, fees: Vec<Amount>) -> Result<Self> {
        if fees.is_empty() {
            return Err(BillingError::InvalidArgument(
                "per-month fee table must cover at least 1 month".to_string(),
            ));
        }
        Ok(Self {
            start_date,
            fees: FeeSchedule::PerMonth(fees),
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn months(&self) -> u32 {
        match &self.fees {
            FeeSchedule::Flat { months, .. } => *months,
            FeeSchedule::PerMonth(fees) => fees.len() as u32,
        }
    }

    /// Fee due for a 1-based month number in `1..=months()`.
    pub fn fee_for(&self, month_number: u32) -> Amount {
        match &self.fees {
            FeeSchedule::Flat { monthly_fee, .. } => *monthly_fee,
            FeeSchedule::PerMonth(fees) => fees[(month_number - 1) as usize],
        }
    }

    pub fn total_fee(&self) -> Decimal {
        match &self.fees {
            FeeSchedule::Flat {
                months,
                monthly_fee,
            } => Decimal::from(*months) * monthly_fee.value(),
            FeeSchedule::PerMonth(fees) => fees.iter().map(|f| f.value()).sum(),
        }
    }
}

/// A stored contract: the code it is filed under plus its validated terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub code: String,
    pub terms: ContractTerms,
}
