use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VehicleKind {
    Collection,
    Transport,
    Disposal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Idle,
    Maintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One simulated waste-handling vehicle on the tracking map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteVehicle {
    pub id: String,
    pub kind: VehicleKind,
    pub location: GeoPoint,
    pub status: VehicleStatus,
    pub waste_type: String,
    pub capacity: u32,
    pub fill_level: f64,
}

/// Per-tick perturbation span for the location random walk, in degrees.
const WALK_SPAN_DEG: f64 = 0.001;
/// Maximum fill-level gain per tick for an active vehicle.
const FILL_STEP_MAX: f64 = 2.0;

impl WasteVehicle {
    /// Applies one simulation step. `lat_r`, `lng_r`, and `fill_r` are
    /// uniform samples in [0, 1) supplied by the caller, so the walk itself
    /// stays deterministic and testable. Only active vehicles take on waste;
    /// fill level is clamped at 100.
    pub fn walk(&mut self, lat_r: f64, lng_r: f64, fill_r: f64) {
        self.location.lat += (lat_r - 0.5) * WALK_SPAN_DEG;
        self.location.lng += (lng_r - 0.5) * WALK_SPAN_DEG;
        if self.status == VehicleStatus::Active {
            self.fill_level = (self.fill_level + fill_r * FILL_STEP_MAX).min(100.0);
        }
    }

    pub fn near_capacity(&self) -> bool {
        self.fill_level > 80.0
    }

    /// The demo fleet shown on the dashboard map.
    pub fn seed_fleet() -> Vec<WasteVehicle> {
        vec![
            WasteVehicle {
                id: "V001".into(),
                kind: VehicleKind::Collection,
                location: GeoPoint { lat: 34.052235, lng: -118.243683 },
                status: VehicleStatus::Active,
                waste_type: "Mixed Debris".into(),
                capacity: 100,
                fill_level: 65.0,
            },
            WasteVehicle {
                id: "V002".into(),
                kind: VehicleKind::Transport,
                location: GeoPoint { lat: 34.056235, lng: -118.253683 },
                status: VehicleStatus::Active,
                waste_type: "Construction".into(),
                capacity: 200,
                fill_level: 45.0,
            },
            WasteVehicle {
                id: "V003".into(),
                kind: VehicleKind::Disposal,
                location: GeoPoint { lat: 34.059235, lng: -118.263683 },
                status: VehicleStatus::Idle,
                waste_type: "Hazardous".into(),
                capacity: 50,
                fill_level: 80.0,
            },
            WasteVehicle {
                id: "V004".into(),
                kind: VehicleKind::Collection,
                location: GeoPoint { lat: 34.062235, lng: -118.273683 },
                status: VehicleStatus::Maintenance,
                waste_type: "Organic".into(),
                capacity: 75,
                fill_level: 30.0,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_fleet_ids_are_unique() {
        let fleet = WasteVehicle::seed_fleet();
        assert_eq!(fleet.len(), 4);
        let mut ids: Vec<&str> = fleet.iter().map(|v| v.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn fill_level_clamps_at_100() {
        let mut vehicle = WasteVehicle::seed_fleet().remove(0);
        vehicle.fill_level = 99.5;
        for _ in 0..10 {
            vehicle.walk(0.5, 0.5, 0.999);
        }
        assert_eq!(vehicle.fill_level, 100.0);
    }

    #[test]
    fn only_active_vehicles_take_on_waste() {
        let mut fleet = WasteVehicle::seed_fleet();
        let before: Vec<f64> = fleet.iter().map(|v| v.fill_level).collect();
        for vehicle in &mut fleet {
            vehicle.walk(0.9, 0.1, 0.9);
        }
        for (vehicle, before) in fleet.iter().zip(before) {
            if vehicle.status == VehicleStatus::Active {
                assert!(vehicle.fill_level > before);
            } else {
                assert_eq!(vehicle.fill_level, before);
            }
        }
    }

    #[test]
    fn walk_moves_location_within_span() {
        let mut vehicle = WasteVehicle::seed_fleet().remove(1);
        let origin = vehicle.location;
        vehicle.walk(1.0, 0.0, 0.0);
        let bound = WALK_SPAN_DEG / 2.0 + 1e-9;
        assert!((vehicle.location.lat - origin.lat).abs() <= bound);
        assert!((vehicle.location.lng - origin.lng).abs() <= bound);
        assert!(vehicle.location != origin);
    }

    #[test]
    fn status_labels_render_lowercase() {
        assert_eq!(VehicleStatus::Maintenance.to_string(), "maintenance");
        assert_eq!(VehicleKind::Collection.to_string(), "collection");
    }
}
