use std::sync::Arc;
use axum::extract::Query;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::google_places_api::GooglePlacesApi;
use crate::controller::AppState;

pub const METERS_PER_MILE: f64 = 1609.34;
pub const DEFAULT_RADIUS_MILES: u32 = 5;
pub const MIN_RADIUS_MILES: u32 = 5;
pub const MAX_RADIUS_MILES: u32 = 50;

pub fn router(app_state: AppState) -> Router {
    let places_api = Arc::new(GooglePlacesApi::new(
        app_state.http_client,
        &app_state.config.google_places_url,
        &app_state.config.google_api_key,
    ));

    Router::new()
        .route("/search", get(search_nearby_restaurants))
        .route_layer(Extension(places_api))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
}

pub async fn search_nearby_restaurants(
    Extension(places_api): Extension<Arc<GooglePlacesApi>>,
    Query(query): Query<SearchParams>,
) -> impl IntoResponse {
    let validated = match validate_search_params(&query) {
        Ok(validated) => validated,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                json!({
                    "statusCode": 400,
                    "error": "Bad Request",
                    "message": message
                }).to_string(),
            ).into_response();
        }
    };

    let radius_meters = f64::from(validated.radius) * METERS_PER_MILE;
    let search_res = places_api
        .search_nearby(
            validated.latitude,
            validated.longitude,
            radius_meters,
        ).await;

    return match search_res {
        Ok(body) => {
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            ).into_response()
        }
        Err(e) => {
            warn!("Something went wrong searching nearby restaurants due to: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "status": "womp_womp" }).to_string(),
            ).into_response()
        }
    };
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedSearch {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: u32,
}

pub fn validate_search_params(params: &SearchParams) -> Result<ValidatedSearch, String> {
    let latitude = params
        .latitude
        .as_deref()
        .ok_or_else(|| "latitude is required".to_string())?
        .parse::<f64>()
        .map_err(|_| "latitude must be a number".to_string())?;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("latitude must be between -90 and 90".to_string());
    }

    let longitude = params
        .longitude
        .as_deref()
        .ok_or_else(|| "longitude is required".to_string())?
        .parse::<f64>()
        .map_err(|_| "longitude must be a number".to_string())?;
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("longitude must be between -180 and 180".to_string());
    }

    // Radius falls back to the default before the range check runs, so a
    // value with no leading integer becomes 5 miles rather than a 400.
    let radius = match params.radius.as_deref() {
        None => i64::from(DEFAULT_RADIUS_MILES),
        Some(raw) => match parse_leading_integer(raw) {
            Some(radius) => radius,
            None => {
                warn!("Unparsable radius {:?}, falling back to {} miles", raw, DEFAULT_RADIUS_MILES);
                i64::from(DEFAULT_RADIUS_MILES)
            }
        },
    };
    if !(i64::from(MIN_RADIUS_MILES)..=i64::from(MAX_RADIUS_MILES)).contains(&radius) {
        return Err(format!(
            "radius must be between {} and {} miles",
            MIN_RADIUS_MILES,
            MAX_RADIUS_MILES,
        ));
    }

    Ok(ValidatedSearch {
        latitude,
        longitude,
        radius: radius as u32,
    })
}

/// Reads an optional sign and the leading run of digits, ignoring any
/// trailing garbage, so "10.5" reads as 10 and "-3" as -3. Returns None
/// when no digits lead the value. Overflowing digit runs saturate, which
/// the range check then rejects.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (sign, rest) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    Some(sign * digits.parse::<i64>().unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(latitude: Option<&str>, longitude: Option<&str>, radius: Option<&str>) -> SearchParams {
        SearchParams {
            latitude: latitude.map(String::from),
            longitude: longitude.map(String::from),
            radius: radius.map(String::from),
        }
    }

    #[test]
    fn accepts_valid_coordinates_and_radius() {
        let validated = validate_search_params(
            &params(Some("40.7"), Some("-74.0"), Some("10"))
        ).unwrap();

        assert_eq!(validated, ValidatedSearch {
            latitude: 40.7,
            longitude: -74.0,
            radius: 10,
        });
    }

    #[test]
    fn rejects_missing_coordinates() {
        let err = validate_search_params(&params(None, Some("-74.0"), None)).unwrap_err();
        assert_eq!(err, "latitude is required");

        let err = validate_search_params(&params(Some("40.7"), None, None)).unwrap_err();
        assert_eq!(err, "longitude is required");
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let err = validate_search_params(&params(Some("north"), Some("-74.0"), None)).unwrap_err();
        assert_eq!(err, "latitude must be a number");

        let err = validate_search_params(&params(Some("40.7"), Some("west"), None)).unwrap_err();
        assert_eq!(err, "longitude must be a number");
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let err = validate_search_params(&params(Some("90.5"), Some("-74.0"), None)).unwrap_err();
        assert_eq!(err, "latitude must be between -90 and 90");

        let err = validate_search_params(&params(Some("40.7"), Some("-180.1"), None)).unwrap_err();
        assert_eq!(err, "longitude must be between -180 and 180");
    }

    #[test]
    fn rejects_parseable_radius_outside_bounds() {
        for radius in ["4", "51", "100", "0", "-3", "99999999999999999999"] {
            let res = validate_search_params(&params(Some("40.7"), Some("-74.0"), Some(radius)));
            assert_eq!(res.unwrap_err(), "radius must be between 5 and 50 miles");
        }
    }

    #[test]
    fn fractional_radius_truncates_to_leading_integer() {
        let validated = validate_search_params(
            &params(Some("40.7"), Some("-74.0"), Some("10.5"))
        ).unwrap();
        assert_eq!(validated.radius, 10);

        let validated = validate_search_params(
            &params(Some("40.7"), Some("-74.0"), Some("12abc"))
        ).unwrap();
        assert_eq!(validated.radius, 12);
    }

    #[test]
    fn missing_radius_defaults_instead_of_failing() {
        let validated = validate_search_params(&params(Some("40.7"), Some("-74.0"), None)).unwrap();
        assert_eq!(validated.radius, DEFAULT_RADIUS_MILES);
    }

    #[test]
    fn unparsable_radius_defaults_instead_of_failing() {
        let validated = validate_search_params(
            &params(Some("40.7"), Some("-74.0"), Some("huge"))
        ).unwrap();
        assert_eq!(validated.radius, DEFAULT_RADIUS_MILES);
    }

    #[test]
    fn default_radius_converts_to_expected_meters() {
        let meters = f64::from(DEFAULT_RADIUS_MILES) * METERS_PER_MILE;
        assert!((meters - 8046.7).abs() < 1e-9);
    }
}
