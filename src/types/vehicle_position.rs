#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

// Every field is optional upstream; OTP omits whatever it does not know.

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Stop {
    pub gtfsId: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct StopRelationship {
    pub status: Option<String>,
    pub stop: Option<Stop>,
    pub arrivalTime: Option<i64>,
    pub departureTime: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Route {
    pub mode: Option<String>,
    pub shortName: Option<String>,
    pub longName: Option<String>,
    pub textColor: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Pattern {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Trip {
    pub id: Option<String>,
    pub gtfsId: Option<String>,
    pub routeShortName: Option<String>,
    pub tripHeadsign: Option<String>,
    pub tripShortName: Option<String>,
    pub route: Option<Route>,
    pub pattern: Option<Pattern>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PrevOrCurrentStop {
    pub scheduledArrival: Option<i64>,
    pub realtimeArrival: Option<i64>,
    pub arrivalDelay: Option<i64>,
    pub scheduledDeparture: Option<i64>,
    pub realtimeDeparture: Option<i64>,
    pub departureDelay: Option<i64>,
}

/// One observation from the `vehiclePositions` query.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct VehiclePosition {
    pub vehicleId: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub heading: Option<f64>,
    pub label: Option<String>,
    pub lastUpdated: Option<i64>,
    pub speed: Option<f64>,
    pub stopRelationship: Option<StopRelationship>,
    pub trip: Option<Trip>,
    pub prevOrCurrentStop: Option<PrevOrCurrentStop>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_full_record() {
        let vehicle: VehiclePosition = serde_json::from_value(json!({
            "vehicleId": "mav:1234",
            "lat": 47.5,
            "lon": 19.0,
            "heading": 90.0,
            "label": "IC 560",
            "lastUpdated": 1760000000,
            "speed": 22.5,
            "stopRelationship": {
                "status": "IN_TRANSIT_TO",
                "stop": { "gtfsId": "1:005510009", "name": "Budapest-Keleti" },
                "arrivalTime": 1760000300,
                "departureTime": 1760000360
            },
            "trip": {
                "id": "VHJpcDox",
                "gtfsId": "1:560",
                "routeShortName": "IC",
                "tripHeadsign": "Budapest-Keleti",
                "tripShortName": "560",
                "route": {
                    "mode": "RAIL",
                    "shortName": "IC",
                    "longName": "InterCity",
                    "textColor": "FFFFFF",
                    "color": "0066CC"
                },
                "pattern": { "id": "UGF0dGVybjox" }
            },
            "prevOrCurrentStop": {
                "scheduledArrival": 36000,
                "realtimeArrival": 36120,
                "arrivalDelay": 120,
                "scheduledDeparture": 36060,
                "realtimeDeparture": 36180,
                "departureDelay": 120
            }
        }))
        .unwrap();

        assert_eq!(vehicle.label.as_deref(), Some("IC 560"));
        assert_eq!(
            vehicle.trip.unwrap().route.unwrap().mode.as_deref(),
            Some("RAIL")
        );
        assert_eq!(vehicle.prevOrCurrentStop.unwrap().arrivalDelay, Some(120));
    }

    #[test]
    fn tolerates_sparse_record() {
        let vehicle: VehiclePosition =
            serde_json::from_value(json!({ "vehicleId": "1", "trip": null })).unwrap();

        assert_eq!(vehicle.vehicleId.as_deref(), Some("1"));
        assert!(vehicle.trip.is_none());
        assert!(vehicle.label.is_none());
    }
}
