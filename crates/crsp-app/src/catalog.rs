//! The immutable record store, populated once at startup.

use crsp_types::{Motorcycle, Result, Vehicle};

/// CSV resources bundled into the binary
const VEHICLES_CSV: &str = include_str!("../assets/vehicles.csv");
const MOTORCYCLES_CSV: &str = include_str!("../assets/motorcycles.csv");

/// The parsed catalog. Loaded once, immutable for the session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
    motorcycles: Vec<Motorcycle>,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>, motorcycles: Vec<Motorcycle>) -> Self {
        Self {
            vehicles,
            motorcycles,
        }
    }

    /// Parse the bundled CSV resources
    pub fn load_bundled() -> Result<Self> {
        let vehicles = crsp_infra::load_vehicles(VEHICLES_CSV)?;
        let motorcycles = crsp_infra::load_motorcycles(MOTORCYCLES_CSV)?;
        Ok(Self::new(vehicles, motorcycles))
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn motorcycles(&self) -> &[Motorcycle] {
        &self.motorcycles
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn motorcycle_count(&self) -> usize {
        self.motorcycles.len()
    }
}
