//! Seat-capacity extraction from upstream link records.
//!
//! The links endpoint is not formally documented and its capacity field
//! has been observed under several names, sometimes as a flat number and
//! sometimes as a nested per-class breakdown. Extraction is deliberately
//! defensive: try a fixed list of field names in priority order, accept
//! either shape, and contribute zero for anything unrecognized so one odd
//! record never fails an enrichment.

use serde_json::Value;

/// Capacity field names tried in priority order; the first usable
/// (numeric or object) field wins.
const CAPACITY_FIELDS: [&str; 4] = ["capacity", "totalCapacity", "assignedCapacity", "seats"];

/// The two capacity shapes the upstream has been observed to send.
#[derive(Debug)]
enum CapacityShape<'a> {
    /// A flat numeric total.
    Flat(f64),
    /// A per-class breakdown, e.g. `{"economy": 150, "business": 20}`.
    /// Non-numeric members are ignored when summing.
    Breakdown(&'a serde_json::Map<String, Value>),
}

fn capacity_shape(link: &Value) -> Option<CapacityShape<'_>> {
    let obj = link.as_object()?;
    for field in CAPACITY_FIELDS {
        match obj.get(field) {
            Some(Value::Number(n)) => return n.as_f64().map(CapacityShape::Flat),
            Some(Value::Object(map)) => return Some(CapacityShape::Breakdown(map)),
            _ => continue,
        }
    }
    None
}

/// Seat capacity of a single link record; zero for unknown shapes and
/// negative totals.
pub fn link_capacity(link: &Value) -> u64 {
    let total = match capacity_shape(link) {
        Some(CapacityShape::Flat(n)) => n,
        Some(CapacityShape::Breakdown(map)) => {
            map.values().filter_map(|v| v.as_f64()).sum()
        }
        None => 0.0,
    };
    if total.is_finite() && total > 0.0 {
        total as u64
    } else {
        0
    }
}

/// Total competition seats across an airport's link records.
pub fn total_competition_seats(links: &[Value]) -> u64 {
    links.iter().map(link_capacity).sum()
}
