use serde::{Deserialize, Serialize};

use super::{ArrivalRecord, LooseValue};

/// top-level JSON envelope of the bus arrival service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ArrivalResponse {
    pub response: ResponseBody,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ResponseBody {
    #[serde(rename = "msgHeader", default)]
    pub msg_header: Option<MsgHeader>,
    #[serde(rename = "msgBody", default)]
    pub msg_body: Option<MsgBody>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MsgHeader {
    #[serde(rename = "queryTime", default)]
    pub query_time: Option<String>,
    #[serde(rename = "resultCode", default)]
    pub result_code: Option<LooseValue>,
    #[serde(rename = "resultMessage", default)]
    pub result_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MsgBody {
    #[serde(rename = "busArrivalList", default)]
    pub bus_arrival_list: Option<ArrivalList>,
}

/// the service returns a bare object instead of a list when a station
/// has exactly one arriving route.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum ArrivalList {
    Many(Vec<ArrivalRecord>),
    One(ArrivalRecord),
}

impl ArrivalResponse {
    pub fn from_json(body: &str) -> Result<ArrivalResponse, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// the service result code, when present and numeric. `0` means success.
    pub fn result_code(&self) -> Option<i64> {
        self.response
            .msg_header
            .as_ref()
            .and_then(|h| h.result_code.as_ref())
            .and_then(|c| c.coerce_to_int().ok())
    }

    pub fn result_message(&self) -> Option<&str> {
        self.response
            .msg_header
            .as_ref()
            .and_then(|h| h.result_message.as_deref())
    }

    pub fn query_time(&self) -> Option<&str> {
        self.response
            .msg_header
            .as_ref()
            .and_then(|h| h.query_time.as_deref())
    }

    /// consumes the envelope, returning the arrival records in response order.
    pub fn into_records(self) -> Vec<ArrivalRecord> {
        match self.response.msg_body.and_then(|b| b.bus_arrival_list) {
            Some(ArrivalList::Many(records)) => records,
            Some(ArrivalList::One(record)) => vec![record],
            None => vec![],
        }
    }
}

#[cfg(test)]
mod test {
    use super::ArrivalResponse;
    use crate::model::arrival::LooseValue;

    const SAMPLE: &str = r#"{
        "response": {
            "comMsgHeader": "",
            "msgHeader": {
                "queryTime": "2025-01-06 08:10:11.123",
                "resultCode": 0,
                "resultMessage": "정상적으로 처리되었습니다."
            },
            "msgBody": {
                "busArrivalList": [
                    {"routeName": 1009, "stationNm1": "의왕톨게이트", "predictTime1": "5", "remainSeatCnt1": 12, "flag": "PASS"},
                    {"routeName": "3002", "stationNm1": "청계요금소", "predictTime1": 14}
                ]
            }
        }
    }"#;

    #[test]
    fn test_decodes_envelope_in_order() {
        let response = ArrivalResponse::from_json(SAMPLE).expect("sample should decode");
        assert_eq!(response.result_code(), Some(0));
        assert_eq!(response.query_time(), Some("2025-01-06 08:10:11.123"));
        let records = response.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].route_name, Some(LooseValue::Int(1009)));
        assert_eq!(records[0].station_name.as_deref(), Some("의왕톨게이트"));
        assert_eq!(records[1].route_name, Some(LooseValue::Text(String::from("3002"))));
        assert_eq!(records[1].remain_seats, None);
    }

    #[test]
    fn test_single_object_list_is_one_record() {
        let body = r#"{"response": {"msgBody": {"busArrivalList": {"routeName": 1009, "predictTime1": 3}}}}"#;
        let records = ArrivalResponse::from_json(body).unwrap().into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].predict_time, Some(LooseValue::Int(3)));
    }

    #[test]
    fn test_missing_body_is_empty() {
        let body = r#"{"response": {"msgHeader": {"resultCode": 4, "resultMessage": "결과가 존재하지 않습니다."}}}"#;
        let response = ArrivalResponse::from_json(body).unwrap();
        assert_eq!(response.result_code(), Some(4));
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(ArrivalResponse::from_json("<OpenAPI_ServiceResponse>").is_err());
        assert!(ArrivalResponse::from_json(r#"{"response": {"msgBody": "#).is_err());
    }
}
