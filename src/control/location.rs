use crate::constants::{BODY_COUNT, GRAVITY_IMPERIAL, GRAVITY_METRIC};
use crate::control::session::UnitSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelestialBody {
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl CelestialBody {
    // Menu order, matching the gravity tables.
    pub const ALL: [CelestialBody; BODY_COUNT] = [
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Earth,
        CelestialBody::Moon,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Earth => "Earth",
            CelestialBody::Moon => "The moon",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
        }
    }

    pub fn gravity(&self, units: UnitSystem) -> f64 {
        let index = *self as usize;
        match units {
            UnitSystem::Metric => GRAVITY_METRIC[index],
            UnitSystem::Imperial => GRAVITY_IMPERIAL[index],
        }
    }
}
