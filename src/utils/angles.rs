use std::f64::consts::PI;

pub fn degrees_to_radians(angle: f64) -> f64 {
    angle * (PI / 180.0)
}

pub fn radians_to_degrees(angle: f64) -> f64 {
    angle * (180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degrees_to_radians_known_values() {
        assert_relative_eq!(degrees_to_radians(0.0), 0.0);
        assert_relative_eq!(degrees_to_radians(90.0), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(degrees_to_radians(180.0), PI, epsilon = 1e-12);
        assert_relative_eq!(degrees_to_radians(-45.0), -PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_radians_to_degrees_known_values() {
        assert_relative_eq!(radians_to_degrees(PI), 180.0, epsilon = 1e-12);
        assert_relative_eq!(radians_to_degrees(PI / 6.0), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_conversion_round_trip() {
        for &angle in &[0.0, 12.5, 45.0, 90.0, 179.9, 360.0, 1234.5] {
            let round_trip = radians_to_degrees(degrees_to_radians(angle));
            assert_relative_eq!(round_trip, angle, epsilon = 1e-9);
        }
    }
}
