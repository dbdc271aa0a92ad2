mod arrival_filter;
mod filtered_row;

pub use arrival_filter::ArrivalFilter;
pub use filtered_row::{timestamp_codec, FilteredRow, TIMESTAMP_FORMAT};
