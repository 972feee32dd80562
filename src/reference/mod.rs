//! Static reference data shared by the intake forms.
//!
//! The area list is the single authoritative copy; every consumer (profile
//! validation, the reference endpoint) imports it from here rather than
//! redefining it.

/// The fixed set of areas selectable on profile and search forms.
pub const AREA_NAMES: [&str; 10] = [
    "New York",
    "San Francisco",
    "Seattle",
    "Austin",
    "Chicago",
    "Boston",
    "Denver",
    "Atlanta",
    "Portland",
    "Miami",
];

/// Exact, case-sensitive membership check against [`AREA_NAMES`].
pub fn is_known_area(name: &str) -> bool {
    AREA_NAMES.contains(&name)
}
