pub mod config;
pub mod driver;
pub mod error;
pub mod sdl;
pub mod system;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod bmp;

pub use config::WindowConfig;
pub use driver::{Driver, IoEvents, Key};
pub use error::BackendError;
pub use sdl::Sdl2Driver;
pub use system::System;
