// Gravity Constants
// Surface gravity for the supported solar system bodies, indexed in menu
// order: Mercury, Venus, Earth, the Moon, Mars, Jupiter, Saturn, Uranus,
// Neptune, Pluto. All values are negative; the acceleration points down.
pub const BODY_COUNT: usize = 10;

pub const GRAVITY_METRIC: [f64; BODY_COUNT] = [
    -3.70, -8.87, -9.80665, -1.62, -3.71, -24.79, -10.44, -8.69, -11.15, -0.66,
]; // m/s²

pub const GRAVITY_IMPERIAL: [f64; BODY_COUNT] = [
    -12.1391, -29.10, -32.174, -5.31496, -12.1719, -81.332, -34.252, -28.5105, -36.5814, -2.1654,
]; // ft/s²

// Input Validation
pub const MAX_INPUT_VALUE: f64 = i32::MAX as f64; // sanity bound for user-entered values
