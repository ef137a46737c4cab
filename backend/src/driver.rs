use crate::config::WindowConfig;
use crate::error::BackendResult;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Return,
    // key name as reported by the platform
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    Other,
}

/// Window system operations needed to show one image.
///
/// Every associated type owns exactly one platform resource and releases it
/// when dropped. A `Canvas` owns the `Window` it was created from and must
/// release its renderer before that window.
pub trait Driver {
    type Context;
    type Window;
    type Canvas;
    type Image;
    type Texture;

    fn init(&self) -> BackendResult<Self::Context>;

    fn create_window(
        &self,
        ctx: &Self::Context,
        config: &WindowConfig,
    ) -> BackendResult<Self::Window>;

    fn create_canvas(&self, window: Self::Window) -> BackendResult<Self::Canvas>;

    /// Scaling quality and the fixed logical coordinate space.
    fn configure_canvas(
        &self,
        canvas: &mut Self::Canvas,
        config: &WindowConfig,
    ) -> BackendResult<()>;

    fn load_image(&self, path: &Path) -> BackendResult<Self::Image>;

    fn create_texture(
        &self,
        canvas: &Self::Canvas,
        image: &Self::Image,
    ) -> BackendResult<Self::Texture>;

    /// Clear, stretch the whole texture over the logical canvas, present.
    fn draw(&self, canvas: &mut Self::Canvas, texture: &Self::Texture) -> BackendResult<()>;

    /// Appends every pending event to `out` without blocking.
    fn poll_events(&self, ctx: &mut Self::Context, out: &mut Vec<IoEvents>);
}
