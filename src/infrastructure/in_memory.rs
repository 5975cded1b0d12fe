use crate::domain::contract::Contract;
use crate::domain::plan::PaymentRecord;
use crate::domain::ports::{ContractStore, PaymentStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for contracts.
///
/// Uses `Arc<RwLock<HashMap<String, Contract>>>` to allow shared concurrent access.
/// Ideal for testing or one-shot runs where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryContractStore {
    contracts: Arc<RwLock<HashMap<String, Contract>>>,
}

impl InMemoryContractStore {
    /// Creates a new, empty in-memory contract store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContractStore for InMemoryContractStore {
    async fn store(&self, contract: Contract) -> Result<()> {
        let mut contracts = self.contracts.write().await;
        contracts.insert(contract.code.clone(), contract);
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<Option<Contract>> {
        let contracts = self.contracts.read().await;
        Ok(contracts.get(code).cloned())
    }
}

/// A thread-safe in-memory store for payment histories, keyed by contract code.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<String, Vec<PaymentRecord>>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn append(&self, code: &str, payment: PaymentRecord) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.entry(code.to_string()).or_default().push(payment);
        Ok(())
    }

    async fn list(&self, code: &str) -> Result<Vec<PaymentRecord>> {
        let payments = self.payments.read().await;
        Ok(payments.get(code).cloned().unwrap_or_default())
    }
}
