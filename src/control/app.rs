use std::io::{BufRead, Write};

use log::{debug, info};

use crate::control::location::CelestialBody;
use crate::control::session::{AngleMode, SessionSettings, UnitSystem};
use crate::errors::InputError;
use crate::input_system::console::Console;
use crate::report_system::report;
use crate::trajectory_system::kinematics::{self, TrajectoryInput};
use crate::utils::angles;

pub struct App<R, W> {
    pub console: Console<R, W>,
    pub settings: SessionSettings,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        App {
            console,
            settings: SessionSettings::default(),
        }
    }

    pub fn run(&mut self) -> Result<(), InputError> {
        info!("starting session with {:?}", self.settings);
        loop {
            let menu = report::render_main_menu();
            let selection = self.console.read_menu_choice(&menu, 1, 5)?;
            match selection {
                1 => self.run_simulations()?,
                2 => self.configure_units()?,
                3 => self.select_location()?,
                4 => self.show_settings()?,
                // The selection is bounded to 1..=5, so anything else is Exit.
                _ => break,
            }
        }
        info!("session ended");
        Ok(())
    }

    fn run_simulations(&mut self) -> Result<(), InputError> {
        loop {
            let launch_angle = self.read_launch_angle()?;
            let initial_velocity = self.read_initial_velocity()?;

            let input = TrajectoryInput::new(initial_velocity, launch_angle);
            let result = kinematics::simulate(input, self.settings.gravity());
            debug!("simulated {:?} -> {:?}", input, result);

            let text = report::render_results(&input, &result, &self.settings);
            self.console.print(&text)?;

            let again = self
                .console
                .read_binary_choice("Continue? Enter 1 (Yes) or 2 (No) >")?;
            if !again {
                return Ok(());
            }
        }
    }

    fn configure_units(&mut self) -> Result<(), InputError> {
        let metric = self
            .console
            .read_binary_choice("Indicate metric (1) or imperial (2) >")?;
        self.settings.units = if metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        };

        let radians = self
            .console
            .read_binary_choice("Indicate radians (1) or degrees (2) >")?;
        self.settings.angle_mode = if radians {
            AngleMode::Radians
        } else {
            AngleMode::Degrees
        };

        info!(
            "units set to {:?}, angles set to {:?}",
            self.settings.units, self.settings.angle_mode
        );
        Ok(())
    }

    fn select_location(&mut self) -> Result<(), InputError> {
        let menu = report::render_location_menu();
        let choice = self
            .console
            .read_menu_choice(&menu, 1, CelestialBody::ALL.len() as i64)?;
        self.settings.location = CelestialBody::ALL[(choice - 1) as usize];

        info!("location set to {}", self.settings.location.name());
        Ok(())
    }

    fn show_settings(&mut self) -> Result<(), InputError> {
        let text = report::render_info(&self.settings);
        self.console.print(&text)
    }

    // Angles are converted to radians as soon as they are read, so the
    // rest of the pipeline never sees degrees.
    fn read_launch_angle(&mut self) -> Result<f64, InputError> {
        let prompt = format!("Input Launch Angle ({}) >", self.settings.angle_unit());
        let value = self.console.read_scalar(&prompt)?;
        match self.settings.angle_mode {
            AngleMode::Degrees => Ok(angles::degrees_to_radians(value)),
            AngleMode::Radians => Ok(value),
        }
    }

    fn read_initial_velocity(&mut self) -> Result<f64, InputError> {
        let prompt = format!(
            "Enter initial velocity ({}) >",
            self.settings.velocity_unit()
        );
        self.console.read_scalar(&prompt)
    }
}
