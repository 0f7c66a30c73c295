//! Shared builders for unit tests

use replate::core::models::{Category, GeoPoint, Recipient, SurplusItem};

/// The surplus site used across allocator tests
pub const ORIGIN: GeoPoint = GeoPoint::new(12.9716, 77.5946);

/// A prepared-food surplus item with a 6-hour window
pub fn make_item(id: &str, kg: f64) -> SurplusItem {
    SurplusItem::new(id.to_string(), id.to_string(), Category::Prepared, kg, 6)
}

/// A verified prepared-food recipient `km_north` kilometers north of ORIGIN
pub fn make_recipient(id: &str, km_north: f64, capacity: f64) -> Recipient {
    Recipient {
        recipient_id: id.to_string(),
        name: id.to_string(),
        location: GeoPoint::new(ORIGIN.lat + km_north / 111.2, ORIGIN.lng),
        capacity_kg: capacity,
        accepted_categories: vec![Category::Prepared],
        verified: true,
    }
}
