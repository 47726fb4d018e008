use serde::{Deserialize, Serialize};

/// Nearby-search response envelope. The provider omits `places` entirely
/// when nothing matched the circle.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct PlacesResponse {
    #[serde(default)]
    pub places: Vec<Restaurant>,
}

/// One business location as returned by the Places API. Pure pass-through
/// record: fields absent in the provider response stay absent when this is
/// serialized again.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub display_name: LocalizedText,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rating_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dine_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curbside_pickup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_breakfast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_lunch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_dinner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_beer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves_wine: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_for_groups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_for_watching_sports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdoor_seating: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_opening_hours: Option<CurrentOpeningHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Photo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_background_color: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CurrentOpeningHours {
    // Proto3 JSON drops false/zero values, hence the defaults here.
    #[serde(default)]
    pub open_now: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub periods: Vec<OpeningHoursPeriod>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekday_descriptions: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<TimePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<TimePeriod>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    #[serde(default)]
    pub day: u8,
    #[serde(default)]
    pub hour: u8,
    #[serde(default)]
    pub minute: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateDetails>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DateDetails {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_publish_time_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_attribution: Option<AuthorAttribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAttribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub name: String,
    #[serde(default)]
    pub width_px: i64,
    #[serde(default)]
    pub height_px: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author_attributions: Vec<AuthorAttribution>,
}
