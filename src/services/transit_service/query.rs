use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

pub const EMMA_GRAPHQL_ENDPOINT: &str =
    "https://emma.mav.hu/otp2-backend/otp/routers/default/index/graphql";

pub const SOURCE_LABEL: &str = "Hungarian Railway (MÁV) Real-time API";

pub const SOURCE_DESCRIPTION: &str = "Real-time positions of trains, trams, and buses in Hungary";

// Bounding box covers Hungary.
pub const VEHICLE_POSITIONS_QUERY: &str = "{vehiclePositions(swLat: 45.45705023932743,swLon: 15.663443499528626,neLat: 48.768228505564224,neLon: 22.56329116419002,modes: [RAIL,RAIL_REPLACEMENT_BUS,SUBURBAN_RAILWAY,TRAMTRAIN,COACH]) { vehicleId lat lon heading label lastUpdated speed stopRelationship { status stop { gtfsId name } arrivalTime departureTime } trip { id gtfsId routeShortName tripHeadsign tripShortName route { mode shortName longName textColor color } pattern { id } } prevOrCurrentStop { scheduledArrival realtimeArrival arrivalDelay scheduledDeparture realtimeDeparture departureDelay } } }";

// Accept-Encoding, Host and Connection are left to reqwest so that
// response decompression stays enabled.
const BROWSER_HEADERS: [(&str, &str); 12] = [
    ("content-type", "application/json"),
    ("accept", "*/*"),
    ("origin", "https://emma.mav.hu"),
    ("referer", "https://emma.mav.hu/"),
    (
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36",
    ),
    ("accept-language", "en-US,en;q=0.9"),
    ("sec-fetch-site", "same-origin"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-dest", "empty"),
    ("sec-ch-ua", "\"Not)A;Brand\";v=\"8\", \"Chromium\";v=\"138\""),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
];

pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(BROWSER_HEADERS.len());
    for (name, value) in BROWSER_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}

pub fn request_body() -> serde_json::Value {
    serde_json::json!({
        "query": VEHICLE_POSITIONS_QUERY,
        "variables": {},
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_query_and_empty_variables() {
        let body = request_body();

        assert_eq!(body["query"], VEHICLE_POSITIONS_QUERY);
        assert_eq!(body["variables"], serde_json::json!({}));
    }

    #[test]
    fn headers_leave_encoding_to_client() {
        let headers = browser_headers();

        assert_eq!(headers.get("origin").unwrap(), "https://emma.mav.hu");
        assert_eq!(headers.get("sec-ch-ua-mobile").unwrap(), "?0");
        assert!(headers.get("accept-encoding").is_none());
    }
}
