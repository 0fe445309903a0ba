use crate::control::location::CelestialBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    Degrees,
    Radians,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub units: UnitSystem,
    pub angle_mode: AngleMode,
    pub location: CelestialBody,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            units: UnitSystem::Metric,
            angle_mode: AngleMode::Degrees,
            location: CelestialBody::Earth,
        }
    }
}

impl SessionSettings {
    pub fn gravity(&self) -> f64 {
        self.location.gravity(self.units)
    }

    pub fn velocity_unit(&self) -> &'static str {
        match self.units {
            UnitSystem::Metric => "meters/second",
            UnitSystem::Imperial => "feet/second",
        }
    }

    pub fn distance_unit(&self) -> &'static str {
        match self.units {
            UnitSystem::Metric => "meters",
            UnitSystem::Imperial => "feet",
        }
    }

    pub fn angle_unit(&self) -> &'static str {
        match self.angle_mode {
            AngleMode::Degrees => "degrees",
            AngleMode::Radians => "radians",
        }
    }
}
