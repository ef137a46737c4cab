use crate::args::{self, Command, USAGE};
use backend::{Driver, IoEvents, Key, System, WindowConfig};
use log::{error, info};
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

impl LoopState {
    pub fn on_event(self, event: &IoEvents) -> Self {
        match event {
            IoEvents::Quit | IoEvents::KeyDown(Key::Return) => LoopState::Stopped,
            _ => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Render, drain events, sleep; until a quit request. Returns the iteration count.
pub fn run<D: Driver>(system: &mut System<D>, frame_delay: Duration) -> u64 {
    let mut state = LoopState::Running;
    let mut frames = 0;
    while state == LoopState::Running {
        system.render_frame();
        state = system
            .process_io_events()
            .iter()
            .fold(state, LoopState::on_event);
        frames += 1;

        std::thread::sleep(frame_delay);
    }
    frames
}

pub fn launch<D: Driver>(
    driver: D,
    config: &WindowConfig,
    args: Vec<OsString>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Outcome {
    let res_path = match args::parse(args) {
        Ok(Command::Run(path)) => path,
        Ok(Command::Help) => {
            return match out.write_all(USAGE.as_bytes()) {
                Ok(()) => Outcome::Success,
                Err(e) => {
                    error!("Cannot print usage: {e}");
                    Outcome::Failure
                }
            };
        }
        Err(e) => {
            if let Err(io) = writeln!(err, "Error: {e}") {
                error!("Cannot report argument error '{e}': {io}");
            }
            return Outcome::Failure;
        }
    };

    info!("Using resources from {res_path:?}");
    let mut system = match System::new(driver, config, &res_path) {
        Ok(s) => s,
        Err(e) => {
            error!("{e}");
            return Outcome::Failure;
        }
    };

    let frames = run(&mut system, config.frame_delay());
    info!("Quit requested after {frames} frames");
    system.shutdown();
    Outcome::Success
}
