pub mod arrival;
pub mod batch;
pub mod filter;
pub mod persist;
pub mod schedule;
pub mod source;
