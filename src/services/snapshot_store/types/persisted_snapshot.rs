use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotMetadata {
    pub fetch_time: String,
    pub source: String,
    pub api_endpoint: String,
    pub description: String,
    pub vehicle_count: usize,
}

/// The document written to disk and served from `/latest`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedSnapshot {
    pub metadata: SnapshotMetadata,
    pub data: Value,
}
