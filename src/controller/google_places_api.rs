use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Response attributes requested from the Places API. Anything not named
/// here is never returned by the provider, keeping payloads bounded.
pub const NEARBY_SEARCH_FIELD_MASK: &str = concat!(
    "places.id,",
    "places.displayName,",
    "places.businessStatus,",
    "places.formattedAddress,",
    "places.shortFormattedAddress,",
    "places.nationalPhoneNumber,",
    "places.googleMapsUri,",
    "places.websiteUri,",
    "places.priceLevel,",
    "places.rating,",
    "places.primaryType,",
    "places.types,",
    "places.userRatingCount,",
    "places.takeout,",
    "places.delivery,",
    "places.dineIn,",
    "places.curbsidePickup,",
    "places.reservable,",
    "places.servesBreakfast,",
    "places.servesLunch,",
    "places.servesDinner,",
    "places.servesBeer,",
    "places.servesWine,",
    "places.goodForGroups,",
    "places.goodForWatchingSports,",
    "places.outdoorSeating,",
    "places.photos,",
    "places.reviews,",
    "places.currentOpeningHours,",
    "places.iconBackgroundColor",
);

/// Only restaurants make it onto the wheel.
pub const INCLUDED_PRIMARY_TYPE: &str = "restaurant";

pub struct GooglePlacesApi {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct NearbySearchRequest {
    location_restriction: LocationRestriction,
    included_primary_types: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
struct LocationRestriction {
    circle: Circle,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
struct Circle {
    center: LatLng,
    radius: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

impl GooglePlacesApi {
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        api_key: &str,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Issues a nearby search restricted to a circle around the given
    /// coordinates. Returns the provider's JSON body untouched so the
    /// caller can pass it straight through.
    pub async fn search_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: f64,
    ) -> anyhow::Result<String> {
        let request_body = NearbySearchRequest {
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: LatLng { latitude, longitude },
                    radius: radius_meters,
                },
            },
            included_primary_types: vec![INCLUDED_PRIMARY_TYPE.to_string()],
        };

        let response = self
            .http_client
            .post(format!("{}/v1/places:searchNearby", self.base_url))
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", NEARBY_SEARCH_FIELD_MASK)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("Places API responded with {}: {}", status, detail));
        }

        Ok(response.text().await?)
    }
}
