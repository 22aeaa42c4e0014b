//! Draw commands recorded during one output frame.
//!
//! Rendering is expressed as data so the backends decide how to realize it
//! and the mock backend can record whole frames for tests.
#![allow(clippy::module_name_repetitions)]

use super::{Handle, OutputHandle, Rect, SurfaceHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand<H: Handle> {
    /// A solid rectangle; the base layer and headless windows draw as these.
    Rect(Rect),
    /// A client surface texture at its current geometry. `resample` asks the
    /// backend to re-fetch the content from the client before drawing.
    Texture {
        surface: SurfaceHandle<H>,
        rect: Rect,
        resample: bool,
    },
}

/// One in-flight render pass for an output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPass<H: Handle> {
    pub output: OutputHandle<H>,
    pub commands: Vec<DrawCommand<H>>,
}

impl<H: Handle> RenderPass<H> {
    #[must_use]
    pub fn new(output: OutputHandle<H>) -> Self {
        Self {
            output,
            commands: Vec::new(),
        }
    }

    pub fn rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    pub fn texture(&mut self, surface: SurfaceHandle<H>, rect: Rect, resample: bool) {
        self.commands.push(DrawCommand::Texture {
            surface,
            rect,
            resample,
        });
    }
}
