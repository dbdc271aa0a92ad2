use reqwest::blocking::{Client, Request};

use super::{ApiConfig, ArrivalSource};
use crate::model::batch::BatchError;

/// fetches arrivals from the bus arrival service with a blocking HTTP GET.
/// requests use the client's default timeout and are never retried.
pub struct HttpArrivalSource {
    client: Client,
    api: ApiConfig,
}

impl HttpArrivalSource {
    pub fn new(api: ApiConfig) -> Result<HttpArrivalSource, BatchError> {
        let client = Client::builder().build().map_err(|e| {
            BatchError::FetchError(format!("failed to create HTTP client: {e}"))
        })?;
        Ok(HttpArrivalSource { client, api })
    }

    pub fn with_client(api: ApiConfig, client: Client) -> HttpArrivalSource {
        HttpArrivalSource { client, api }
    }

    /// builds the GET request, `<base_url>?serviceKey=..&stationId=..&format=json`.
    pub fn build_request(&self) -> Result<Request, BatchError> {
        self.client
            .get(&self.api.base_url)
            .query(&[
                ("serviceKey", self.api.service_key.as_str()),
                ("stationId", self.api.station_id.as_str()),
                ("format", "json"),
            ])
            .build()
            .map_err(|e| BatchError::FetchError(format!("failed to build request: {e}")))
    }
}

impl ArrivalSource for HttpArrivalSource {
    fn fetch(&self) -> Result<String, BatchError> {
        let request = self.build_request()?;
        log::debug!("GET {} (station {})", self.api.base_url, self.api.station_id);
        let response = self
            .client
            .execute(request)
            .map_err(|e| BatchError::FetchError(format!("failed to send request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BatchError::FetchError(format!("unexpected HTTP status {status}")));
        }

        response
            .text()
            .map_err(|e| BatchError::FetchError(format!("failed to read response body: {e}")))
    }
}
