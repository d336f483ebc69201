use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use super::{
    query::{browser_headers, request_body},
    transport::{Transport, TransportResponse},
    types::{fetch_error::FetchError, vehicle_positions_document::VehiclePositionsDocument},
};

#[derive(Clone)]
pub struct VehiclePositionsFetcherConfig {
    pub endpoint: String,
}

#[derive(Clone)]
pub struct VehiclePositionsFetcher {
    config: VehiclePositionsFetcherConfig,
    transport: Arc<dyn Transport>,
}

impl VehiclePositionsFetcher {
    pub fn new(config: VehiclePositionsFetcherConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub async fn fetch(&self) -> Result<VehiclePositionsDocument, FetchError> {
        info!("Making API request to {}", self.config.endpoint);

        let result = match self.send().await {
            Ok(resp) => validate_response(&resp),
            Err(e) => Err(e),
        };

        match &result {
            Ok(document) => info!(
                "API response validated: {} vehicles found",
                document.vehicle_count()
            ),
            Err(e) => warn!("Fetch failed: {}", e),
        }

        result
    }

    async fn send(&self) -> Result<TransportResponse, FetchError> {
        let body = serde_json::to_vec(&request_body())
            .map_err(|e| FetchError::Network(format!("Failed to encode request: {}", e)))?;

        self.transport
            .post(&self.config.endpoint, browser_headers(), body)
            .await
    }
}

/// Checks a complete upstream response in order, stopping at the first problem.
pub fn validate_response(resp: &TransportResponse) -> Result<VehiclePositionsDocument, FetchError> {
    if !resp.is_success() {
        return Err(FetchError::HttpStatus {
            status: resp.status,
        });
    }

    let document: Value =
        serde_json::from_slice(&resp.body).map_err(|e| FetchError::JsonParse(e.to_string()))?;

    validate_document(document)
}

pub fn validate_document(document: Value) -> Result<VehiclePositionsDocument, FetchError> {
    if let Some(errors) = document.get("errors").filter(|e| has_graphql_errors(e)) {
        return Err(FetchError::GraphQl(errors.to_string()));
    }

    let data = match document.get("data").filter(|d| !d.is_null()) {
        Some(data) => data,
        None => {
            return Err(FetchError::MissingData {
                keys: keys_of(&document),
            })
        }
    };

    let checked = match data.get("vehiclePositions") {
        None | Some(Value::Null) => Err(FetchError::MissingVehiclePositions {
            keys: keys_of(data),
        }),
        Some(Value::Array(_)) => Ok(()),
        Some(other) => Err(FetchError::VehiclePositionsNotSequence {
            found: json_type_name(other),
        }),
    };

    checked.map(|()| VehiclePositionsDocument::new_validated(document))
}

// Empty and falsy values carry no error report.
fn has_graphql_errors(errors: &Value) -> bool {
    match errors {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(list) => !list.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn keys_of(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
