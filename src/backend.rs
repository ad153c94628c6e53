//! The boundary to whatever executes [`Frame`]s.
//!
//! The engine only ever talks to a [`RenderBackend`]. The wgpu implementation
//! lives in [`crate::context`] behind the `window` feature; [`RecordingBackend`]
//! keeps frames in memory for tests and headless runs.

use thiserror::Error;

use crate::render::Frame;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The presentation surface went away (resize race, minimise). The frame
    /// is dropped and the surface reconfigured on the next one.
    #[error("render surface lost or outdated")]
    SurfaceLost,
    #[error("graphics device lost")]
    DeviceLost,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackendError {
    /// Whether the host has to tear down instead of skipping the frame.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, BackendError::SurfaceLost)
    }
}

pub trait RenderBackend {
    fn draw(&mut self, frame: &Frame) -> Result<(), BackendError>;

    /// Release every backend resource. Called exactly once, before exit.
    fn teardown(&mut self);
}

/// Keeps the most recent frames instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    frames: Vec<Frame>,
    capacity: Option<usize>,
    drawn: usize,
    torn_down: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep the last `capacity` frames; the draw counter still counts all.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Frames drawn since creation.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl RenderBackend for RecordingBackend {
    fn draw(&mut self, frame: &Frame) -> Result<(), BackendError> {
        if self.torn_down {
            return Err(BackendError::DeviceLost);
        }
        if let Some(capacity) = self.capacity {
            if self.frames.len() >= capacity {
                self.frames.remove(0);
            }
        }
        self.frames.push(frame.clone());
        self.drawn += 1;
        Ok(())
    }

    fn teardown(&mut self) {
        if !self.torn_down {
            log::info!("recording backend torn down after {} frames", self.drawn);
        }
        self.torn_down = true;
    }
}
