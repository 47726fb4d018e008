use std::collections::HashSet;
use rand::Rng;
use crate::models::restaurant::Restaurant;

/// Drops places whose display name already appeared earlier in the list.
/// The first occurrence wins and the original order is preserved.
pub fn dedup_by_display_name(places: Vec<Restaurant>) -> Vec<Restaurant> {
    let mut seen: HashSet<String> = HashSet::new();

    places
        .into_iter()
        .filter(|place| seen.insert(place.display_name.text.clone()))
        .collect()
}

/// Uniform random pick over the wheel. An empty wheel yields no winner.
pub fn spin(places: &[Restaurant]) -> Option<&Restaurant> {
    if places.is_empty() {
        return None;
    }

    let index = rand::thread_rng().gen_range(0..places.len());
    places.get(index)
}
