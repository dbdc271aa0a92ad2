use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::FilteredRow;
use crate::model::arrival::{coerce_to_int, ArrivalRecord};

/// thresholds applied to each [`ArrivalRecord`] of a batch. both checks are
/// optional; an unset threshold lets every record through that check.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrivalFilter {
    /// only keep arrivals of this route number.
    #[serde(default)]
    pub route_name: Option<i64>,
    /// only keep arrivals predicted strictly sooner than this many minutes.
    #[serde(default)]
    pub max_predict_minutes: Option<i64>,
}

impl ArrivalFilter {
    pub fn new(route_name: Option<i64>, max_predict_minutes: Option<i64>) -> ArrivalFilter {
        ArrivalFilter {
            route_name,
            max_predict_minutes,
        }
    }

    /// filters and transforms a batch of records, preserving their order.
    ///
    /// # Arguments
    /// * time - reference time of the batch, stamped on every row
    /// * records - records in response order
    pub fn apply(&self, time: &NaiveDateTime, records: &[ArrivalRecord]) -> Vec<FilteredRow> {
        records
            .iter()
            .filter_map(|record| self.filter_record(time, record))
            .collect()
    }

    /// returns the row for a single record, or None if the record is filtered out.
    pub fn filter_record(
        &self,
        time: &NaiveDateTime,
        record: &ArrivalRecord,
    ) -> Option<FilteredRow> {
        let route = match coerce_to_int(record.route_name.as_ref()) {
            Ok(route) => route,
            Err(e) => {
                log::debug!("skipping record with unreadable routeName: {e}");
                return None;
            }
        };
        if let Some(expected) = self.route_name {
            if route != expected {
                return None;
            }
        }

        let predict_time = match coerce_to_int(record.predict_time.as_ref()) {
            Ok(minutes) => minutes,
            Err(e) => {
                log::debug!("skipping route {route} with unreadable predictTime1: {e}");
                return None;
            }
        };
        if let Some(ceiling) = self.max_predict_minutes {
            if predict_time >= ceiling {
                return None;
            }
        }

        let remain_seat = coerce_to_int(record.remain_seats.as_ref())
            .unwrap_or(FilteredRow::UNKNOWN_SEATS);

        Some(FilteredRow {
            time: *time,
            predict_time,
            remain_seat,
            station_name: record.station_name.clone().unwrap_or_default(),
        })
    }
}
