//! Contract billing for hostel administration.
//!
//! Monthly payment schedules are derived from contract terms (start date,
//! duration, monthly fee) and reconciled against recorded payments to
//! produce per-month paid/unpaid status and aggregate statistics.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
