pub mod contract;
pub mod money;
pub mod plan;
pub mod ports;
pub mod schedule;
