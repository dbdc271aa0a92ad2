use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// a row in the output CSV file. field names double as the CSV header,
/// `time,predict_time,remain_seat,station_name`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FilteredRow {
    /// reference time of the batch that observed this arrival.
    #[serde(with = "timestamp_codec")]
    pub time: NaiveDateTime,
    /// predicted minutes until arrival.
    pub predict_time: i64,
    /// remaining seats, or [`FilteredRow::UNKNOWN_SEATS`].
    pub remain_seat: i64,
    pub station_name: String,
}

impl FilteredRow {
    /// written in place of a seat count that is missing or cannot be read.
    pub const UNKNOWN_SEATS: i64 = -1;

    pub const HEADER: [&'static str; 4] = ["time", "predict_time", "remain_seat", "station_name"];
}

/// `YYYY-MM-DD HH:MM:SS`, shared by the CSV rows and the run log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub mod timestamp_codec {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::Deserialize;

    pub fn serialize<S>(t: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        s.serialize_str(&t.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<NaiveDateTime, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
