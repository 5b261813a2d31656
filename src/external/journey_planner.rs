use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    entities::{Coordinates, Plan, Waypoints},
    error::{invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub near: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

// The planner reports each journey as a list of markers. The first
// marker of type "route" carries the whole-journey attributes; the
// rest describe individual segments. Numeric attributes arrive as
// strings.
#[derive(Clone, Debug, Deserialize)]
struct JourneyDocument {
    marker: Vec<Marker>,
}

#[derive(Clone, Debug, Deserialize)]
struct Marker {
    #[serde(rename = "@attributes")]
    attributes: MarkerAttributes,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct MarkerAttributes {
    #[serde(rename = "type")]
    marker_type: Option<String>,
    name: Option<String>,
    start: Option<String>,
    finish: Option<String>,
    length: Option<String>,
    time: Option<String>,
    itinerary: Option<String>,
    start_latitude: Option<String>,
    start_longitude: Option<String>,
    finish_latitude: Option<String>,
    finish_longitude: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JourneyOverview {
    pub name: String,
    pub itinerary: Option<i64>,
    pub length_m: Option<f64>,
    pub time_s: Option<f64>,
    pub start: Option<Coordinates>,
    pub finish: Option<Coordinates>,
}

impl JourneyOverview {
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let document: JourneyDocument = serde_json::from_str(body)?;

        let attributes = document
            .marker
            .into_iter()
            .map(|marker| marker.attributes)
            .find(|attributes| attributes.marker_type.as_deref() == Some("route"))
            .ok_or_else(|| upstream_error())?;

        Ok(Self {
            name: display_name(&attributes),
            itinerary: attributes.itinerary.as_deref().and_then(|v| v.parse().ok()),
            length_m: attributes.length.as_deref().and_then(|v| v.parse().ok()),
            time_s: attributes.time.as_deref().and_then(|v| v.parse().ok()),
            start: parse_coordinates(&attributes.start_latitude, &attributes.start_longitude),
            finish: parse_coordinates(&attributes.finish_latitude, &attributes.finish_longitude),
        })
    }
}

fn display_name(attributes: &MarkerAttributes) -> String {
    if let Some(name) = attributes.name.as_deref().filter(|name| !name.is_empty()) {
        return name.to_string();
    }

    match (attributes.start.as_deref(), attributes.finish.as_deref()) {
        (Some(start), Some(finish)) => format!("{} to {}", start, finish),
        _ => String::new(),
    }
}

fn parse_coordinates(latitude: &Option<String>, longitude: &Option<String>) -> Option<Coordinates> {
    let latitude = latitude.as_deref()?.parse().ok()?;
    let longitude = longitude.as_deref()?.parse().ok()?;

    Some(Coordinates::new(latitude, longitude))
}

// lon,lat pairs separated by pipes, the order the planner expects.
fn itinerary_points(points: &Waypoints) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", point.longitude, point.latitude))
        .collect::<Vec<_>>()
        .join("|")
}

#[tracing::instrument]
pub async fn plan_journey(points: &Waypoints, plan: Plan, speed_kmh: u32) -> Result<String, Error> {
    let api_base = env::var("JOURNEY_API_BASE")?;
    let url = format!("https://{}/api/journey.json", api_base);
    let key = env::var("JOURNEY_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("plan", plan.name())])
        .query(&[("speed", speed_kmh.to_string())])
        .query(&[("itinerarypoints", itinerary_points(points))])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(res.text().await?)
}

#[tracing::instrument]
pub async fn retrieve_journey(itinerary: i64, plan: Plan) -> Result<String, Error> {
    let api_base = env::var("JOURNEY_API_BASE")?;
    let url = format!("https://{}/api/journey.json", api_base);
    let key = env::var("JOURNEY_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("plan", plan.name())])
        .query(&[("itinerary", itinerary.to_string())])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(res.text().await?)
}

#[derive(Clone, Debug, Deserialize)]
struct GeocoderResponse {
    results: Option<GeocoderResults>,
}

#[derive(Clone, Debug, Deserialize)]
struct GeocoderResults {
    result: Vec<GeocoderResult>,
}

#[derive(Clone, Debug, Deserialize)]
struct GeocoderResult {
    name: String,
    near: Option<String>,
    latitude: String,
    longitude: String,
}

fn parse_geocoder(body: &str) -> Result<Vec<Place>, Error> {
    let response: GeocoderResponse = serde_json::from_str(body)?;

    let results = match response.results {
        Some(results) => results.result,
        None => return Ok(Vec::new()),
    };

    Ok(results
        .into_iter()
        .filter_map(|result| {
            let latitude = result.latitude.parse().ok()?;
            let longitude = result.longitude.parse().ok()?;

            Some(Place {
                name: result.name,
                near: result.near,
                latitude,
                longitude,
            })
        })
        .collect())
}

#[tracing::instrument]
pub async fn geocode(query: String) -> Result<Vec<Place>, Error> {
    let api_base = env::var("JOURNEY_API_BASE")?;
    let url = format!("https://{}/api/geocoder.json", api_base);
    let key = env::var("JOURNEY_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("street", query)])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    parse_geocoder(&res.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOURNEY_BODY: &str = r#"{
        "marker": [
            {
                "@attributes": {
                    "type": "route",
                    "start": "Thoday Street",
                    "finish": "Madingley Road",
                    "name": "Thoday Street to Madingley Road",
                    "length": "5235",
                    "time": "1246",
                    "itinerary": "981423",
                    "start_latitude": "52.196690",
                    "start_longitude": "0.138776",
                    "finish_latitude": "52.210178",
                    "finish_longitude": "0.105086"
                }
            },
            {
                "@attributes": {
                    "type": "segment",
                    "name": "Thoday Street",
                    "length": "64",
                    "time": "17"
                }
            }
        ]
    }"#;

    #[test]
    fn test_journey_overview_reads_route_marker() {
        let overview = JourneyOverview::from_json(JOURNEY_BODY).unwrap();

        assert_eq!(overview.name, "Thoday Street to Madingley Road");
        assert_eq!(overview.itinerary, Some(981423));
        assert_eq!(overview.length_m, Some(5235.0));
        assert_eq!(overview.time_s, Some(1246.0));
        assert_eq!(overview.start, Some(Coordinates::new(52.196690, 0.138776)));
        assert_eq!(overview.finish, Some(Coordinates::new(52.210178, 0.105086)));
    }

    #[test]
    fn test_journey_overview_requires_a_route_marker() {
        let body = r#"{"marker": [{"@attributes": {"type": "segment", "name": "Thoday Street"}}]}"#;

        assert!(JourneyOverview::from_json(body).is_err());
    }

    #[test]
    fn test_journey_overview_rejects_malformed_body() {
        assert!(JourneyOverview::from_json("<html>bad gateway</html>").is_err());
    }

    #[test]
    fn test_display_name_falls_back_to_endpoints() {
        let attributes = MarkerAttributes {
            start: Some("Thoday Street".to_string()),
            finish: Some("Madingley Road".to_string()),
            ..Default::default()
        };

        assert_eq!(display_name(&attributes), "Thoday Street to Madingley Road");
        assert_eq!(display_name(&MarkerAttributes::default()), "");
    }

    #[test]
    fn test_itinerary_points_are_lon_lat_pairs() {
        let points = Waypoints::new(vec![
            Coordinates::new(52.196690, 0.138776),
            Coordinates::new(52.210178, 0.105086),
        ]);

        assert_eq!(
            itinerary_points(&points),
            "0.138776,52.19669|0.105086,52.210178"
        );
    }

    #[test]
    fn test_parse_geocoder_skips_unparseable_results() {
        let body = r#"{
            "results": {
                "result": [
                    {
                        "name": "Mill Road",
                        "near": "Cambridge",
                        "latitude": "52.198750",
                        "longitude": "0.138620"
                    },
                    {
                        "name": "Nowhere",
                        "near": null,
                        "latitude": "not-a-number",
                        "longitude": "0.1"
                    }
                ]
            }
        }"#;

        let places = parse_geocoder(body).unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Mill Road");
        assert_eq!(places[0].near.as_deref(), Some("Cambridge"));
        assert_eq!(places[0].latitude, 52.198750);
        assert_eq!(places[0].longitude, 0.138620);
    }

    #[test]
    fn test_parse_geocoder_handles_no_results() {
        assert!(parse_geocoder(r#"{"results": null}"#).unwrap().is_empty());
    }
}
