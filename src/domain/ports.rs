use super::contract::Contract;
use super::plan::PaymentRecord;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContractStore: Send + Sync {
    async fn store(&self, contract: Contract) -> Result<()>;
    async fn get(&self, code: &str) -> Result<Option<Contract>>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn append(&self, code: &str, payment: PaymentRecord) -> Result<()>;
    async fn list(&self, code: &str) -> Result<Vec<PaymentRecord>>;
}

pub type ContractStoreBox = Box<dyn ContractStore>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;
