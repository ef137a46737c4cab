//! Recording stand-in for a real window system.
//!
//! Every resource handed out by [`FakeDriver`] is a [`Handle`] that writes to
//! a shared [`Journal`] when acquired and when dropped, so tests can check
//! acquisition order, release order and release counts.

use crate::config::WindowConfig;
use crate::driver::{Driver, IoEvents};
use crate::error::{BackendError, BackendResult};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Startup step at which a [`FakeDriver`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Window,
    Renderer,
    LogicalSize,
    ImageLoad,
    Texture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Acquire(&'static str),
    Release(&'static str),
}

#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<Entry>,
    loaded: Vec<PathBuf>,
    frames: u64,
}

impl Journal {
    pub fn acquired(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Acquire(name) => Some(*name),
                Entry::Release(_) => None,
            })
            .collect()
    }

    pub fn released(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Release(name) => Some(*name),
                Entry::Acquire(_) => None,
            })
            .collect()
    }

    pub fn release_count(&self, name: &str) -> usize {
        self.released().iter().filter(|n| **n == name).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn loaded_paths(&self) -> &[PathBuf] {
        &self.loaded
    }

    /// Number of `draw` calls, failed ones included.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// One fake platform resource.
#[derive(Debug)]
pub struct Handle {
    name: &'static str,
    journal: Rc<RefCell<Journal>>,
}

impl Handle {
    fn acquire(name: &'static str, journal: &Rc<RefCell<Journal>>) -> Self {
        journal.borrow_mut().entries.push(Entry::Acquire(name));
        Self {
            name,
            journal: Rc::clone(journal),
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.journal
            .borrow_mut()
            .entries
            .push(Entry::Release(self.name));
    }
}

#[derive(Debug)]
pub struct FakeCanvas {
    // renderer is released before the window it draws into
    _renderer: Handle,
    _window: Handle,
}

#[derive(Debug, Clone, Default)]
pub struct FakeDriver {
    journal: Rc<RefCell<Journal>>,
    script: Rc<RefCell<VecDeque<Vec<IoEvents>>>>,
    fail_at: Option<Stage>,
    failing_draws: bool,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_at(mut self, stage: Stage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    pub fn failing_draws(mut self) -> Self {
        self.failing_draws = true;
        self
    }

    /// Queues the events returned by one `poll_events` call.
    ///
    /// Once the script runs out every poll reports `Quit`, so a loop under
    /// test always terminates.
    pub fn with_events(self, batch: Vec<IoEvents>) -> Self {
        self.script.borrow_mut().push_back(batch);
        self
    }

    pub fn journal(&self) -> std::cell::Ref<'_, Journal> {
        self.journal.borrow()
    }

    fn check(&self, stage: Stage, err: impl FnOnce() -> BackendError) -> BackendResult<()> {
        match self.fail_at {
            Some(s) if s == stage => Err(err()),
            _ => Ok(()),
        }
    }
}

impl Driver for FakeDriver {
    type Context = Handle;
    type Window = Handle;
    type Canvas = FakeCanvas;
    type Image = Handle;
    type Texture = Handle;

    fn init(&self) -> BackendResult<Handle> {
        self.check(Stage::Init, || {
            BackendError::SubsystemInit("no video device".to_string())
        })?;
        Ok(Handle::acquire("subsystem", &self.journal))
    }

    fn create_window(&self, _ctx: &Handle, _config: &WindowConfig) -> BackendResult<Handle> {
        self.check(Stage::Window, || {
            BackendError::WindowCreate("no display".to_string())
        })?;
        Ok(Handle::acquire("window", &self.journal))
    }

    fn create_canvas(&self, window: Handle) -> BackendResult<FakeCanvas> {
        self.check(Stage::Renderer, || {
            BackendError::RendererCreate("no accelerated renderer".to_string())
        })?;
        Ok(FakeCanvas {
            _renderer: Handle::acquire("renderer", &self.journal),
            _window: window,
        })
    }

    fn configure_canvas(
        &self,
        _canvas: &mut FakeCanvas,
        _config: &WindowConfig,
    ) -> BackendResult<()> {
        self.check(Stage::LogicalSize, || {
            BackendError::LogicalSize("unsupported size".to_string())
        })
    }

    fn load_image(&self, path: &Path) -> BackendResult<Handle> {
        self.journal.borrow_mut().loaded.push(path.to_path_buf());
        self.check(Stage::ImageLoad, || BackendError::ImageLoad {
            path: path.to_path_buf(),
            reason: "Couldn't open file".to_string(),
        })?;
        Ok(Handle::acquire("image", &self.journal))
    }

    fn create_texture(&self, _canvas: &FakeCanvas, _image: &Handle) -> BackendResult<Handle> {
        self.check(Stage::Texture, || {
            BackendError::TextureCreate("out of video memory".to_string())
        })?;
        Ok(Handle::acquire("texture", &self.journal))
    }

    fn draw(&self, _canvas: &mut FakeCanvas, _texture: &Handle) -> BackendResult<()> {
        self.journal.borrow_mut().frames += 1;
        if self.failing_draws {
            return Err(BackendError::Render("device lost".to_string()));
        }
        Ok(())
    }

    fn poll_events(&self, _ctx: &mut Handle, out: &mut Vec<IoEvents>) {
        match self.script.borrow_mut().pop_front() {
            Some(batch) => out.extend(batch),
            None => out.push(IoEvents::Quit),
        }
    }
}
