mod api_config;
mod arrival_source;
mod http_arrival_source;

pub use api_config::ApiConfig;
pub use arrival_source::ArrivalSource;
pub use http_arrival_source::HttpArrivalSource;
