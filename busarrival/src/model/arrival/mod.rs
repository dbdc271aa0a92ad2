mod arrival_record;
mod arrival_response;
mod coercion_error;
mod loose_value;

pub use arrival_record::ArrivalRecord;
pub use arrival_response::{ArrivalList, ArrivalResponse, MsgBody, MsgHeader, ResponseBody};
pub use coercion_error::CoercionError;
pub use loose_value::{coerce_to_int, LooseValue};
