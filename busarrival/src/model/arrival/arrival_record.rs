use serde::{Deserialize, Serialize};

use super::LooseValue;

/// one entry of the `busArrivalList`, describing the next arrival of a
/// single route at the polled station. numeric fields are kept loose here
/// and coerced by the filter, so one malformed record never fails a batch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ArrivalRecord {
    /// route number, e.g. `1009` or `"1009"`.
    #[serde(rename = "routeName", default)]
    pub route_name: Option<LooseValue>,
    /// name of the stop the bus is currently closest to.
    #[serde(rename = "stationNm1", default)]
    pub station_name: Option<String>,
    /// predicted minutes until arrival.
    #[serde(rename = "predictTime1", default)]
    pub predict_time: Option<LooseValue>,
    /// remaining seats on board. often missing for routes without seat counting.
    #[serde(rename = "remainSeatCnt1", default)]
    pub remain_seats: Option<LooseValue>,
}
