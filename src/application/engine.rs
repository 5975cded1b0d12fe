use crate::domain::contract::Contract;
use crate::domain::plan::{PaymentPlan, PaymentRecord};
use crate::domain::ports::{ContractStoreBox, PaymentStoreBox};
use crate::domain::schedule::Schedule;
use crate::error::{BillingError, Result};

/// The main entry point for contract billing.
///
/// `BillingEngine` owns the storage backends. It holds no derived state:
/// schedules and statistics are recomputed from the stored contract terms
/// and payment history on every call.
pub struct BillingEngine {
    contract_store: ContractStoreBox,
    payment_store: PaymentStoreBox,
}

impl BillingEngine {
    /// Creates a new `BillingEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `contract_store` - The store for contracts.
    /// * `payment_store` - The store for recorded payments.
    pub fn new(contract_store: ContractStoreBox, payment_store: PaymentStoreBox) -> Self {
        Self {
            contract_store,
            payment_store,
        }
    }

    /// Creates or replaces the contract stored under its code.
    pub async fn upsert_contract(&self, contract: Contract) -> Result<()> {
        tracing::debug!(
            code = %contract.code,
            months = contract.terms.months(),
            "storing contract"
        );
        self.contract_store.store(contract).await
    }

    /// Validates a payment against the stored contract and records it.
    ///
    /// An explicit month linkage outside the contract's schedule is an
    /// error and the payment is not persisted.
    pub async fn record_payment(&self, code: &str, payment: PaymentRecord) -> Result<()> {
        let contract = self.require_contract(code).await?;
        if let Some(m) = payment.month
            && (m == 0 || m > contract.terms.months())
        {
            return Err(BillingError::InvalidArgument(format!(
                "payment month {m} is outside the schedule (1..={})",
                contract.terms.months()
            )));
        }
        tracing::debug!(code, amount = %payment.amount.value(), "recording payment");
        self.payment_store.append(code, payment).await
    }

    /// Computes the reconciled payment plan for a stored contract.
    pub async fn plan_for(&self, code: &str) -> Result<PaymentPlan> {
        let contract = self.require_contract(code).await?;
        let payments = self.payment_store.list(code).await?;
        let schedule = Schedule::generate(&contract.terms)?;
        let plan = PaymentPlan::reconcile(&schedule, &payments)?;
        tracing::debug!(
            code,
            paid_months = plan.statistics.paid_months,
            total_months = plan.statistics.total_months,
            "reconciled plan"
        );
        Ok(plan)
    }

    async fn require_contract(&self, code: &str) -> Result<Contract> {
        self.contract_store
            .get(code)
            .await?
            .ok_or_else(|| BillingError::ContractNotFound(code.to_string()))
    }
}
