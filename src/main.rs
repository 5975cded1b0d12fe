use chrono::NaiveDate;
use clap::Parser;
use hostel_billing::application::engine::BillingEngine;
use hostel_billing::domain::contract::{Contract, ContractTerms};
use hostel_billing::domain::money::Amount;
use hostel_billing::domain::ports::{ContractStoreBox, PaymentStoreBox};
use hostel_billing::infrastructure::in_memory::{InMemoryContractStore, InMemoryPaymentStore};
use hostel_billing::interfaces::csv::payment_reader::PaymentReader;
use hostel_billing::interfaces::csv::plan_writer::PlanWriter;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file (omit to print a fully unpaid plan)
    payments: Option<PathBuf>,

    /// Contract start date (YYYY-MM-DD); due dates keep its day-of-month
    #[arg(long)]
    start_date: NaiveDate,

    /// Contract duration in months
    #[arg(long)]
    months: u32,

    /// Fee due each month
    #[arg(long, allow_negative_numbers = true)]
    monthly_fee: Decimal,

    /// Contract code used as the storage key
    #[arg(long, default_value = "adhoc")]
    contract: String,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Emit the plan as JSON instead of CSV tables
    #[arg(long)]
    json: bool,
}

fn build_engine(db_path: Option<PathBuf>) -> Result<BillingEngine> {
    #[cfg(feature = "storage-rocksdb")]
    if let Some(db_path) = db_path {
        use hostel_billing::infrastructure::rocksdb::RocksDBStore;

        // Use persistent storage (RocksDB)
        let store = RocksDBStore::open(db_path).into_diagnostic()?;

        let contracts: ContractStoreBox = Box::new(store.clone());
        let payments: PaymentStoreBox = Box::new(store);

        return Ok(BillingEngine::new(contracts, payments));
    }

    #[cfg(not(feature = "storage-rocksdb"))]
    if db_path.is_some() {
        eprintln!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }

    // Use in-memory storage
    let contracts: ContractStoreBox = Box::new(InMemoryContractStore::new());
    let payments: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());

    Ok(BillingEngine::new(contracts, payments))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = build_engine(cli.db_path)?;

    let terms = ContractTerms::flat(
        cli.start_date,
        cli.months,
        Amount::new(cli.monthly_fee).into_diagnostic()?,
    )
    .into_diagnostic()?;
    engine
        .upsert_contract(Contract {
            code: cli.contract.clone(),
            terms,
        })
        .await
        .into_diagnostic()?;

    // Record payments
    if let Some(path) = cli.payments {
        let file = File::open(path).into_diagnostic()?;
        let reader = PaymentReader::new(file);
        for record in reader.payments() {
            match record {
                Ok(payment) => {
                    if let Err(e) = engine.record_payment(&cli.contract, payment).await {
                        eprintln!("Error recording payment: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("Error reading payment: {}", e);
                }
            }
        }
    }

    let plan = engine.plan_for(&cli.contract).await.into_diagnostic()?;

    // Output the reconciled plan
    let stdout = io::stdout();
    if cli.json {
        serde_json::to_writer_pretty(stdout.lock(), &plan).into_diagnostic()?;
        println!();
    } else {
        let mut writer = PlanWriter::new(stdout.lock());
        writer.write_plan(&plan).into_diagnostic()?;
    }

    Ok(())
}
