mod csv_ops;
mod run_log_ops;

pub use csv_ops::append_rows;
pub use run_log_ops::append_log_line;
