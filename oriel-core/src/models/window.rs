//! Window information.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

use super::workspace::WorkspaceId;
use super::{Handle, Surface, SurfaceHandle, SurfaceState};

/// Core-allocated identity of a window. Windows may be headless and have no
/// backend handle, so they are not identified by one.
pub type WindowId = u32;

/// A desktop-visible entity that owns a client surface, or stands alone for
/// synthetic/headless windows.
///
/// The authoritative copy of the size is the window's own fields for a
/// headless window, and the last committed surface state for a surfaced one;
/// the fields are only ever written from a commit in that case. Position is
/// server-owned for both kinds.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Window<H: Handle> {
    pub id: WindowId,
    #[serde(bound = "")]
    pub surface: Option<Surface<H>>,
    pub workspace: Option<WorkspaceId>,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    pub mapped: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub fullscreened: bool,
    /// True once the first configure/commit round-trip finished.
    pub ready: bool,
    dirty: bool,
    pub title: Option<String>,
    pub app_id: Option<String>,
}

impl<H: Handle> Window<H> {
    #[must_use]
    pub fn new(
        id: WindowId,
        surface: Option<Surface<H>>,
        title: Option<String>,
        app_id: Option<String>,
    ) -> Self {
        let headless = surface.is_none();
        Self {
            id,
            surface,
            workspace: None,
            x: 0,
            y: 0,
            width: 640,
            height: 480,
            // A headless window has no client to wait for.
            mapped: headless,
            minimized: false,
            maximized: false,
            fullscreened: false,
            ready: headless,
            dirty: headless,
            title,
            app_id,
        }
    }

    #[must_use]
    pub fn is_headless(&self) -> bool {
        self.surface.is_none()
    }

    #[must_use]
    pub fn surface_handle(&self) -> Option<SurfaceHandle<H>> {
        self.surface.as_ref().map(|s| s.handle)
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Directly writes the size fields. Only valid for headless windows and
    /// for mirroring a committed surface state.
    pub(crate) fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// True when the content texture must be re-sampled from the client.
    #[must_use]
    pub const fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Called by the render pipeline once the content was re-sampled.
    pub fn drawn(&mut self) {
        self.dirty = false;
    }

    /// Mirror a freshly committed surface state into the window fields.
    /// Returns `true` if the size changed.
    pub(crate) fn apply_committed(&mut self, state: SurfaceState) -> bool {
        let resized = (state.width > 0 && state.width != self.width)
            || (state.height > 0 && state.height != self.height);
        if state.width > 0 {
            self.width = state.width;
        }
        if state.height > 0 {
            self.height = state.height;
        }
        self.maximized = state.maximized;
        self.fullscreened = state.fullscreen;
        self.dirty = true;
        resized
    }

    /// Drop the surface, keeping the last committed geometry. Any pending
    /// proposal is discarded with the surface.
    pub(crate) fn detach_surface(&mut self) -> Option<Surface<H>> {
        self.surface.take()
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MockHandle, SurfaceRole};

    #[test]
    fn a_headless_window_is_mapped_and_ready_at_birth() {
        let subject: Window<MockHandle> = Window::new(1, None, None, None);
        assert!(subject.mapped);
        assert!(subject.ready);
        assert!(subject.dirty());
    }

    #[test]
    fn a_surfaced_window_waits_for_its_client() {
        let surface = Surface::new(SurfaceHandle(1), SurfaceRole::Toplevel);
        let subject: Window<MockHandle> = Window::new(1, Some(surface), None, None);
        assert!(!subject.mapped);
        assert!(!subject.ready);
    }

    #[test]
    fn detaching_the_surface_retains_the_committed_geometry() {
        let surface = Surface::new(SurfaceHandle(1), SurfaceRole::Toplevel);
        let mut subject: Window<MockHandle> = Window::new(1, Some(surface), None, None);
        subject.set_size(1024, 768);
        subject.detach_surface();
        assert!(subject.is_headless());
        assert_eq!((subject.width(), subject.height()), (1024, 768));
    }
}
