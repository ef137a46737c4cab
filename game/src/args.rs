use std::convert::Infallible;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_RES_PATH: &str = "res";

pub const USAGE: &str = "\
Usage: [RES_PATH | -h]
  RES_PATH: Resources folder path
";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    /// resources folder holding img.bmp
    Run(PathBuf),
}

#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("Unexpected argument '{0}'")]
    Unexpected(String),
    /// Any pico-args failure, passed through unchanged. The path converter
    /// below cannot fail, so today nothing produces it.
    #[error(transparent)]
    Parse(#[from] pico_args::Error),
}

fn to_path(s: &OsStr) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(s))
}

/// Takes the arguments without the program name.
pub fn parse(args: Vec<OsString>) -> Result<Command, ArgsError> {
    let mut pargs = pico_args::Arguments::from_vec(args);
    let first = pargs.opt_free_from_os_str(to_path)?;

    // Anything past the first argument is rejected, -h included.
    if let Some(extra) = pargs.finish().into_iter().next() {
        return Err(ArgsError::Unexpected(extra.to_string_lossy().into_owned()));
    }

    Ok(match first {
        Some(path) if path.as_os_str() == "-h" => Command::Help,
        Some(path) => Command::Run(path),
        None => Command::Run(PathBuf::from(DEFAULT_RES_PATH)),
    })
}
