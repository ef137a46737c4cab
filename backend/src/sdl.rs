use crate::config::WindowConfig;
use crate::driver::{Driver, IoEvents, Key};
use crate::error::{BackendError, BackendResult};
use log::warn;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::render::{Canvas, RenderTarget, Texture, WindowCanvas};
use sdl2::surface::Surface;
use std::mem::ManuallyDrop;
use std::path::Path;

const SCALE_QUALITY_HINT: &str = "SDL_RENDER_SCALE_QUALITY";

/// Driver backed by SDL2's 2D renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sdl2Driver;

pub struct Sdl2Context {
    event_pump: sdl2::EventPump,
    video: sdl2::VideoSubsystem,
    // last handle to go, SDL_Quit runs here
    _sdl: sdl2::Sdl,
}

/// Texture destroyed on drop. It must not outlive the canvas it came from.
pub struct Sdl2Texture(ManuallyDrop<Texture>);

impl Sdl2Texture {
    fn new(texture: Texture) -> Self {
        Self(ManuallyDrop::new(texture))
    }
}

impl Drop for Sdl2Texture {
    fn drop(&mut self) {
        // never touched again after this
        unsafe { ManuallyDrop::take(&mut self.0).destroy() };
    }
}

impl Driver for Sdl2Driver {
    type Context = Sdl2Context;
    type Window = sdl2::video::Window;
    type Canvas = WindowCanvas;
    type Image = Surface<'static>;
    type Texture = Sdl2Texture;

    fn init(&self) -> BackendResult<Sdl2Context> {
        let sdl = sdl2::init().map_err(BackendError::SubsystemInit)?;
        let video = sdl.video().map_err(BackendError::SubsystemInit)?;
        let event_pump = sdl.event_pump().map_err(BackendError::SubsystemInit)?;
        Ok(Sdl2Context {
            event_pump,
            video,
            _sdl: sdl,
        })
    }

    fn create_window(
        &self,
        ctx: &Sdl2Context,
        config: &WindowConfig,
    ) -> BackendResult<sdl2::video::Window> {
        ctx.video
            .window(&config.title, config.width, config.height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| BackendError::WindowCreate(e.to_string()))
    }

    fn create_canvas(&self, window: sdl2::video::Window) -> BackendResult<WindowCanvas> {
        window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| BackendError::RendererCreate(e.to_string()))
    }

    fn configure_canvas(
        &self,
        canvas: &mut WindowCanvas,
        config: &WindowConfig,
    ) -> BackendResult<()> {
        if !sdl2::hint::set(SCALE_QUALITY_HINT, &config.scale_quality) {
            warn!(
                "{SCALE_QUALITY_HINT}={} rejected, keeping the default filtering",
                config.scale_quality
            );
        }
        canvas
            .set_logical_size(config.width, config.height)
            .map_err(|e| BackendError::LogicalSize(e.to_string()))
    }

    fn load_image(&self, path: &Path) -> BackendResult<Surface<'static>> {
        load_bitmap(path)
    }

    fn create_texture(
        &self,
        canvas: &WindowCanvas,
        image: &Surface<'static>,
    ) -> BackendResult<Sdl2Texture> {
        canvas
            .texture_creator()
            .create_texture_from_surface(image)
            .map(Sdl2Texture::new)
            .map_err(|e| BackendError::TextureCreate(e.to_string()))
    }

    fn draw(&self, canvas: &mut WindowCanvas, texture: &Sdl2Texture) -> BackendResult<()> {
        blit(canvas, texture)
    }

    fn poll_events(&self, ctx: &mut Sdl2Context, out: &mut Vec<IoEvents>) {
        out.extend(ctx.event_pump.poll_iter().map(IoEvents::from));
    }
}

/// Clears the target and stretches the whole texture over its logical area.
fn blit<T: RenderTarget>(canvas: &mut Canvas<T>, texture: &Sdl2Texture) -> BackendResult<()> {
    canvas.clear();
    canvas.copy(&texture.0, None, None).map_err(BackendError::Render)?;
    canvas.present();
    Ok(())
}

/// Decodes an uncompressed bitmap. Works without the video subsystem.
pub fn load_bitmap(path: &Path) -> BackendResult<Surface<'static>> {
    Surface::load_bmp(path).map_err(|reason| BackendError::ImageLoad {
        path: path.to_path_buf(),
        reason,
    })
}

impl From<Keycode> for Key {
    fn from(keycode: Keycode) -> Self {
        match keycode {
            Keycode::Return => Key::Return,
            other => Key::Other(other.name()),
        }
    }
}

impl From<Event> for IoEvents {
    fn from(event: Event) -> Self {
        match event {
            Event::Quit { .. } => IoEvents::Quit,
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => IoEvents::KeyDown(keycode.into()),
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => IoEvents::KeyUp(keycode.into()),
            _ => IoEvents::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::BMP;
    use sdl2::pixels::PixelFormatEnum;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shark-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_uncompressed_bitmap() {
        let dir = scratch_dir("valid");
        let pixels: Vec<u8> = (0..5 * 3 * 3).map(|i| i as u8).collect();
        BMP::from_mem(5, 3, &pixels)
            .to_file(&WindowConfig::image_path(&dir))
            .unwrap();

        let surface = load_bitmap(&WindowConfig::image_path(&dir)).unwrap();
        assert_eq!((surface.width(), surface.height()), (5, 3));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_bitmap_is_image_load_error() {
        let dir = scratch_dir("missing");
        let path = WindowConfig::image_path(&dir);
        match load_bitmap(&path) {
            Err(BackendError::ImageLoad { path: p, reason }) => {
                assert_eq!(p, path);
                assert!(!reason.is_empty());
            }
            other => panic!("expected ImageLoad, got {:?}", other.err()),
        }
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn garbage_bitmap_is_image_load_error() {
        let dir = scratch_dir("garbage");
        let path = WindowConfig::image_path(&dir);
        std::fs::write(&path, b"definitely not a bitmap").unwrap();

        assert!(matches!(
            load_bitmap(&path),
            Err(BackendError::ImageLoad { .. })
        ));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn blit_stretches_texture_over_whole_target() {
        let dir = scratch_dir("blit");
        let path = WindowConfig::image_path(&dir);
        // one red pixel, stored as BGR
        BMP::from_mem(1, 1, &[0, 0, 255]).to_file(&path).unwrap();
        let image = load_bitmap(&path).unwrap();

        let target = Surface::new(4, 3, PixelFormatEnum::RGB24).unwrap();
        let mut canvas = target.into_canvas().unwrap();
        let texture = Sdl2Texture::new(
            canvas
                .texture_creator()
                .create_texture_from_surface(&image)
                .unwrap(),
        );

        blit(&mut canvas, &texture).unwrap();
        let pixels = canvas.read_pixels(None, PixelFormatEnum::RGB24).unwrap();
        assert_eq!(pixels.len(), 4 * 3 * 3);
        assert!(pixels.chunks_exact(3).all(|p| *p == [255u8, 0, 0]));

        drop(texture);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn quit_and_return_are_recognised() {
        assert_eq!(IoEvents::from(Event::Quit { timestamp: 0 }), IoEvents::Quit);
        assert_eq!(Key::from(Keycode::Return), Key::Return);
        assert_eq!(Key::from(Keycode::Space), Key::Other("Space".to_string()));
    }
}
