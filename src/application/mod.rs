//! Application layer orchestrating the billing workflow.
//!
//! This module defines the `BillingEngine`, which owns the storage ports
//! and derives payment plans on demand from stored contract terms and
//! payment history.

pub mod engine;
