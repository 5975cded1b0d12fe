pub mod payment_reader;
pub mod plan_writer;
