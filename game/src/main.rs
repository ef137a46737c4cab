mod app;
mod args;

use backend::{Sdl2Driver, WindowConfig};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    app::launch(
        Sdl2Driver,
        &WindowConfig::default(),
        std::env::args_os().skip(1).collect(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .into()
}
