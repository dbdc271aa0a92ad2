use serde::{Deserialize, Serialize};

/// connection parameters for the bus arrival service.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ApiConfig::default_station_id")]
    pub station_id: String,
    /// decoded service key. the HTTP client percent-encodes it on the way out,
    /// so the already-encoded key issued alongside it must not be used here.
    #[serde(default)]
    pub service_key: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &str =
        "https://apis.data.go.kr/6410000/busarrivalservice/v2/getBusArrivalListv2";

    /// 의왕톨게이트, toward 잠실.
    pub const DEFAULT_STATION_ID: &str = "226000039";

    pub fn new(base_url: &str, station_id: &str, service_key: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            station_id: station_id.to_string(),
            service_key: service_key.to_string(),
        }
    }

    fn default_base_url() -> String {
        String::from(Self::DEFAULT_BASE_URL)
    }

    fn default_station_id() -> String {
        String::from(Self::DEFAULT_STATION_ID)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            station_id: Self::default_station_id(),
            service_key: String::new(),
        }
    }
}

// keeps the credential out of debug logs
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = if self.service_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("station_id", &self.station_id)
            .field("service_key", &key)
            .finish()
    }
}
