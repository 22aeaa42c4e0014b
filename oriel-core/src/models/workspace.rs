//! A named group of windows with one focus and a pluggable layout.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

use super::History;
use super::window::WindowId;

pub type WorkspaceId = usize;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    /// Name of the layout strategy, resolved through the layout registry.
    pub layout: String,
    windows: Vec<WindowId>,
    focused: Option<WindowId>,
    pub history: History<WindowId>,
}

impl Workspace {
    #[must_use]
    pub fn new(id: WorkspaceId, name: String, layout: String) -> Self {
        Self {
            id,
            name,
            layout,
            windows: Vec::new(),
            focused: None,
            history: History::default(),
        }
    }

    /// Returns `false` if the window was already a member.
    pub fn add_window(&mut self, window: WindowId) -> bool {
        if self.windows.contains(&window) {
            return false;
        }
        self.windows.push(window);
        true
    }

    /// Removes the window from the member set and the history. If it was
    /// focused, focus falls back to the most-recently-used survivor, or
    /// clears: focus is always empty or a live member.
    pub fn remove_window(&mut self, window: WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| *w == window) else {
            return false;
        };
        self.windows.remove(index);
        self.history.remove(window);
        if self.focused == Some(window) {
            self.focused = self.history.top();
        }
        true
    }

    /// No-op if the window is not a member.
    pub fn focus_window(&mut self, window: WindowId) -> bool {
        if !self.windows.contains(&window) {
            return false;
        }
        self.focused = Some(window);
        self.history.shift(window);
        true
    }

    #[must_use]
    pub fn focused_window(&self) -> Option<WindowId> {
        self.focused
    }

    #[must_use]
    pub fn contains(&self, window: WindowId) -> bool {
        self.windows.contains(&window)
    }

    #[must_use]
    pub fn windows(&self) -> &[WindowId] {
        &self.windows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Draw order for the render pipeline: windows never focused first in
    /// insertion order, then history entries oldest-used first, so the
    /// most-recently-focused window draws last and on top.
    #[must_use]
    pub fn render_order(&self) -> Vec<WindowId> {
        let mut order: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|w| !self.history.contains(**w))
            .copied()
            .collect();
        order.extend(self.history.iter().rev().copied());
        order
    }

    /// Topmost-first order, for point lookups.
    #[must_use]
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut order = self.render_order();
        order.reverse();
        order
    }
}
