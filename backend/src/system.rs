use crate::config::WindowConfig;
use crate::driver::{Driver, IoEvents};
use crate::error::BackendResult;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Everything the display loop owns.
///
/// Fields drop top to bottom, so the texture goes first, then the drawing
/// surface with its window, then the windowing subsystem.
pub struct System<D: Driver> {
    texture: D::Texture,
    canvas: D::Canvas,
    context: D::Context,
    driver: D,
    res_path: PathBuf,
    events: Vec<IoEvents>,
}

impl<D: Driver> System<D> {
    /// Acquires the subsystem, window, renderer and texture in that order.
    ///
    /// On failure the resources acquired so far are already released when
    /// the error is returned, because they are plain locals here.
    pub fn new(driver: D, config: &WindowConfig, res_path: &Path) -> BackendResult<Self> {
        let context = driver.init()?;
        let window = driver.create_window(&context, config)?;
        let mut canvas = driver.create_canvas(window)?;
        driver.configure_canvas(&mut canvas, config)?;

        let image_path = WindowConfig::image_path(res_path);
        debug!("Loading image {image_path:?}");
        let image = driver.load_image(&image_path)?;
        let texture = driver.create_texture(&canvas, &image)?;
        drop(image);

        info!("{}x{} canvas ready with {image_path:?}", config.width, config.height);
        Ok(System {
            texture,
            canvas,
            context,
            driver,
            res_path: res_path.to_path_buf(),
            events: Vec::new(),
        })
    }

    pub fn res_path(&self) -> &Path {
        &self.res_path
    }

    /// Draws one frame. Failures are logged and otherwise ignored.
    pub fn render_frame(&mut self) -> bool {
        match self.driver.draw(&mut self.canvas, &self.texture) {
            Ok(()) => true,
            Err(e) => {
                warn!("{e}");
                false
            }
        }
    }

    pub fn process_io_events(&mut self) -> &[IoEvents] {
        self.events.clear();
        self.driver.poll_events(&mut self.context, &mut self.events);
        &self.events
    }

    pub fn shutdown(self) {
        debug!("Releasing texture, renderer, window and video subsystem");
        drop(self);
    }
}
