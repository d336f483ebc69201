use serde_json::Value;

use crate::types::vehicle_position::VehiclePosition;

/// A validated upstream response. The raw document is kept whole so it can be
/// persisted unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct VehiclePositionsDocument {
    raw: Value,
}

impl VehiclePositionsDocument {
    /// Callers must have checked that `data.vehiclePositions` is an array.
    pub(crate) fn new_validated(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn vehicles(&self) -> &[Value] {
        vehicle_positions_of(&self.raw)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles().len()
    }

    pub fn first_vehicle(&self) -> Option<VehiclePosition> {
        self.vehicles()
            .first()
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Label of the first record, read straight from the raw JSON so a
    /// mistyped sibling field cannot hide it.
    pub fn first_vehicle_label(&self) -> Option<&str> {
        self.vehicles()
            .first()
            .and_then(|v| v.get("label"))
            .and_then(Value::as_str)
            .filter(|label| !label.is_empty())
    }
}

/// `data.vehiclePositions` when it is an array.
pub fn vehicle_positions_of(raw: &Value) -> Option<&Vec<Value>> {
    raw.get("data")
        .and_then(|d| d.get("vehiclePositions"))
        .and_then(Value::as_array)
}
