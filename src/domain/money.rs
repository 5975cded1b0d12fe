use crate::error::{BillingError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary amount.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for financial calculations. Fees and payments are never
/// negative; a zero fee is valid (e.g. a waived month).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(BillingError::InvalidArgument(format!(
                "amount must be non-negative, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = BillingError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(Amount::new(dec!(0.0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(-1.0)),
            Err(BillingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_amount_validated_at_deserialization() {
        let ok: Amount = serde_json::from_str("\"150.50\"").unwrap();
        assert_eq!(ok.value(), dec!(150.50));

        assert!(serde_json::from_str::<Amount>("\"-1\"").is_err());
    }

    #[test]
    fn test_amount_serializes_as_plain_decimal() {
        let amount = Amount::new(dec!(500000)).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"500000\"");
    }
}
