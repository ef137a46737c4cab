use std::path::{Path, PathBuf};
use std::time::Duration;

pub const WIN_W: u32 = 625;
pub const WIN_H: u32 = 604;
pub const TITLE: &str = "SHARK GAME";
pub const IMAGE_SUFFIX: &str = "/img.bmp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    /// logical canvas width (in px), also the initial window width
    pub width: u32,
    /// logical canvas height (in px), also the initial window height
    pub height: u32,
    /// loop iterations per second
    pub frame_rate: u32,
    /// value of the SDL_RENDER_SCALE_QUALITY hint
    pub scale_quality: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            width: WIN_W,
            height: WIN_H,
            frame_rate: 60,
            scale_quality: "nearest".to_string(),
        }
    }
}

impl WindowConfig {
    /// Fixed sleep between loop iterations. Whole milliseconds, so 60 fps gives 16ms.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frame_rate.max(1)))
    }

    /// Location of the displayed bitmap: `res_path` followed by `/img.bmp`,
    /// appended as-is, so an empty path names `/img.bmp`.
    pub fn image_path(res_path: &Path) -> PathBuf {
        let mut path = res_path.as_os_str().to_owned();
        path.push(IMAGE_SUFFIX);
        PathBuf::from(path)
    }
}
