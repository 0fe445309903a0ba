use crate::control::location::CelestialBody;
use crate::control::session::{AngleMode, SessionSettings, UnitSystem};
use crate::trajectory_system::kinematics::{TrajectoryInput, TrajectoryResult};
use crate::utils::angles;

pub fn render_results(
    input: &TrajectoryInput,
    result: &TrajectoryResult,
    settings: &SessionSettings,
) -> String {
    // The angle is stored in radians; echo it back the way it was entered.
    let angle_display = match settings.angle_mode {
        AngleMode::Degrees => angles::radians_to_degrees(input.launch_angle),
        AngleMode::Radians => input.launch_angle,
    };

    format!(
        "\nINITIAL VELOCITY: {:.2} {} | LAUNCH ANGLE: {:.2} {}\n\
         TOTAL FLIGHT TIME: {:.2} seconds\n\
         DISTANCE: {:.2} {}\n\
         MAXIMUM HEIGHT: {:.2} {}\n\n",
        input.initial_velocity,
        settings.velocity_unit(),
        angle_display,
        settings.angle_unit(),
        result.flight_time,
        result.horizontal_displacement,
        settings.distance_unit(),
        result.max_height,
        settings.distance_unit()
    )
}

pub fn render_info(settings: &SessionSettings) -> String {
    format!(
        "\nLOCATION: {}\n\
         GRAVITY: {}\n\
         UNITS: {}, {}\n\n",
        settings.location.name(),
        settings.gravity(),
        unit_system_label(settings.units),
        angle_mode_label(settings.angle_mode)
    )
}

pub fn render_main_menu() -> String {
    "\nMain Menu\n\
     1. Simulations\n\
     2. Units\n\
     3. Location\n\
     4. Current Settings\n\
     5. Exit\n\
     >"
        .to_string()
}

pub fn render_location_menu() -> String {
    let mut menu = String::from("\nSelect the planet you would like to run simulations for\n");
    for (index, body) in CelestialBody::ALL.iter().enumerate() {
        menu.push_str(&format!("{}. {}\n", index + 1, body.name()));
    }
    menu.push('>');
    menu
}

fn unit_system_label(units: UnitSystem) -> &'static str {
    match units {
        UnitSystem::Metric => "METRIC",
        UnitSystem::Imperial => "IMPERIAL",
    }
}

fn angle_mode_label(mode: AngleMode) -> &'static str {
    match mode {
        AngleMode::Degrees => "DEGREES",
        AngleMode::Radians => "RADIANS",
    }
}
