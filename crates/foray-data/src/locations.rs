//! Location registry
//!
//! Regions an actor can foray into, with their quality tiers. Tier 1 is
//! plain ground; tiers 2 and 3 grant roll bonuses and extra loot draws.

use foray_core::{LocationId, LocationSpec};

pub const WINDSWEPT_FIELD: LocationId = LocationId(1);
pub const MIRE_HOLLOW: LocationId = LocationId(2);
pub const ASHEN_CALDERA: LocationId = LocationId(3);
pub const GLASS_TARN: LocationId = LocationId(4);
pub const SHATTERED_PEAK: LocationId = LocationId(5);

pub static LOCATIONS: &[LocationSpec] = &[
    LocationSpec::new(1, "Windswept Field", 1),
    LocationSpec::new(2, "Mire Hollow", 1),
    LocationSpec::new(3, "Ashen Caldera", 2),
    LocationSpec::new(4, "Glass Tarn", 2),
    LocationSpec::new(5, "Shattered Peak", 3),
];

/// Look a location up by (case-insensitive) name.
pub fn find_location(name: &str) -> Option<&'static LocationSpec> {
    LOCATIONS
        .iter()
        .find(|l| l.name.eq_ignore_ascii_case(name))
}

/// Look a location up by id.
pub fn location_by_id(id: LocationId) -> Option<&'static LocationSpec> {
    LOCATIONS.iter().find(|l| l.id == id)
}
