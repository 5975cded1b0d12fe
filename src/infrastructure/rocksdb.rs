use crate::domain::contract::Contract;
use crate::domain::plan::PaymentRecord;
use crate::domain::ports::{ContractStore, PaymentStore};
use crate::error::{BillingError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing contracts.
pub const CF_CONTRACTS: &str = "contracts";
/// Column Family for storing payment histories.
pub const CF_PAYMENTS: &str = "payments";

/// A persistent store implementation using RocksDB.
///
/// Contracts and payment histories live in separate Column Families, both
/// keyed by contract code with JSON-encoded values. A payment history is
/// stored as one list per contract and rewritten on append.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families ("contracts" and
    /// "payments") exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_contracts = ColumnFamilyDescriptor::new(CF_CONTRACTS, Options::default());
        let cf_payments = ColumnFamilyDescriptor::new(CF_PAYMENTS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_contracts, cf_payments])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            BillingError::InternalError(Box::new(std::io::Error::other(format!(
                "{name} column family not found"
            ))))
        })
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| BillingError::InternalError(Box::new(e)))
}

fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| BillingError::InternalError(Box::new(e)))
}

#[async_trait]
impl ContractStore for RocksDBStore {
    async fn store(&self, contract: Contract) -> Result<()> {
        let cf = self.cf(CF_CONTRACTS)?;
        self.db
            .put_cf(&cf, contract.code.as_bytes(), encode(&contract)?)?;
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<Option<Contract>> {
        let cf = self.cf(CF_CONTRACTS)?;
        match self.db.get_cf(&cf, code.as_bytes())? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl PaymentStore for RocksDBStore {
    async fn append(&self, code: &str, payment: PaymentRecord) -> Result<()> {
        let cf = self.cf(CF_PAYMENTS)?;
        let mut history: Vec<PaymentRecord> = match self.db.get_cf(&cf, code.as_bytes())? {
            Some(bytes) => decode(&bytes)?,
            None => Vec::new(),
        };
        history.push(payment);
        self.db.put_cf(&cf, code.as_bytes(), encode(&history)?)?;
        Ok(())
    }

    async fn list(&self, code: &str) -> Result<Vec<PaymentRecord>> {
        let cf = self.cf(CF_PAYMENTS)?;
        match self.db.get_cf(&cf, code.as_bytes())? {
            Some(bytes) => decode(&bytes),
            None => Ok(Vec::new()),
        }
    }
}
