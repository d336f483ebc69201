use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error fetching data: {0}")]
    Network(String),
    #[error("failed to decode response body: {0}")]
    TransportDecode(String),
    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },
    #[error("response body is not valid JSON: {0}")]
    JsonParse(String),
    #[error("GraphQL API returned errors: {0}")]
    GraphQl(String),
    #[error("invalid API response: missing 'data' field (response keys: {keys:?})")]
    MissingData { keys: Vec<String> },
    #[error("invalid API response: missing 'vehiclePositions' field (data keys: {keys:?})")]
    MissingVehiclePositions { keys: Vec<String> },
    #[error("invalid vehiclePositions format: expected array, got {found}")]
    VehiclePositionsNotSequence { found: &'static str },
}

impl FetchError {
    /// Upstream answered, but with something other than a usable document.
    pub fn is_upstream_rejection(&self) -> bool {
        !matches!(
            self,
            FetchError::Network(_) | FetchError::TransportDecode(_)
        )
    }
}
