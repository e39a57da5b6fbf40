//! Text search and range filters. Matching is case-insensitive substring,
//! OR-ed across the supplied field values; an empty query is the identity
//! filter. Output preserves input order and the input is never mutated.

use entity::{Client, Lead, Property};

pub fn search<T, F>(items: &[T], query: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<&str>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            fields(item)
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn search_leads(leads: &[Lead], query: &str) -> Vec<Lead> {
    search(leads, query, |lead| vec![&lead.name, &lead.email])
}

pub fn search_properties(properties: &[Property], query: &str) -> Vec<Property> {
    search(properties, query, |property| {
        vec![&property.title, &property.location]
    })
}

pub fn search_clients(clients: &[Client], query: &str) -> Vec<Client> {
    search(clients, query, |client| vec![&client.name, &client.email])
}

/// Whether a price sits inside a budget range. A range with `min > max` is
/// a data-entry error and matches nothing.
pub fn in_budget(price: i64, min: i64, max: i64) -> bool {
    min <= max && (min..=max).contains(&price)
}

/// Listings matching a client's stated preferences: kind, location, and
/// budget. Empty preference lists impose no constraint.
pub fn matching_properties(client: &Client, properties: &[Property]) -> Vec<Property> {
    let prefs = &client.preferences;
    properties
        .iter()
        .filter(|property| {
            let kind_ok =
                prefs.property_kinds.is_empty() || prefs.property_kinds.contains(&property.kind);
            let location_ok = prefs.locations.is_empty()
                || prefs
                    .locations
                    .iter()
                    .any(|location| location.eq_ignore_ascii_case(&property.location));
            kind_ok
                && location_ok
                && in_budget(property.price, prefs.budget_min, prefs.budget_max)
        })
        .cloned()
        .collect()
}
