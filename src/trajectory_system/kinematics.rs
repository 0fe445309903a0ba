#[derive(Debug, Clone, Copy)]
pub struct TrajectoryInput {
    pub initial_velocity: f64,
    pub launch_angle: f64, // radians
}

impl TrajectoryInput {
    pub fn new(initial_velocity: f64, launch_angle: f64) -> Self {
        TrajectoryInput {
            initial_velocity,
            launch_angle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryResult {
    pub flight_time: f64,
    pub max_height: f64,
    pub horizontal_displacement: f64,
}

pub fn velocity_components(initial_velocity: f64, launch_angle: f64) -> (f64, f64) {
    (
        initial_velocity * launch_angle.cos(),
        initial_velocity * launch_angle.sin(),
    )
}

// Time to come back down to launch height under constant acceleration.
// Gravity is negative, so the sign flip keeps the result positive.
pub fn flight_time(vertical_velocity: f64, gravity: f64) -> f64 {
    -(vertical_velocity * 2.0) / gravity
}

// Height above launch at the apex, reached at half the total flight time.
pub fn max_height(half_flight_time: f64, vertical_velocity: f64, gravity: f64) -> f64 {
    vertical_velocity * half_flight_time + (gravity / 2.0) * half_flight_time.powi(2)
}

pub fn horizontal_displacement(horizontal_velocity: f64, flight_time: f64) -> f64 {
    horizontal_velocity * flight_time
}

pub fn simulate(input: TrajectoryInput, gravity: f64) -> TrajectoryResult {
    let (vx, vy) = velocity_components(input.initial_velocity, input.launch_angle);
    let total_time = flight_time(vy, gravity);
    let peak = max_height(total_time / 2.0, vy, gravity);
    let distance = horizontal_displacement(vx, total_time);

    TrajectoryResult {
        flight_time: total_time,
        max_height: peak,
        horizontal_displacement: distance,
    }
}
