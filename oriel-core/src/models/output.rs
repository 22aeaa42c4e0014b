//! One physical or virtual display.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

use super::workspace::WorkspaceId;
use super::{Handle, History, OutputHandle};

/// An axis-aligned rectangle in the global coordinate space.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }
}

/// A display target driving its own frame loop and workspace set.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Output<H: Handle> {
    #[serde(bound = "")]
    pub handle: OutputHandle<H>,
    pub rect: Rect,
    /// Refresh rate in millihertz, 60 Hz being 60000.
    pub refresh_mhz: i32,
    workspaces: Vec<WorkspaceId>,
    current: Option<WorkspaceId>,
    pub history: History<WorkspaceId>,
}

impl<H: Handle> Output<H> {
    #[must_use]
    pub fn new(handle: OutputHandle<H>, rect: Rect, refresh_mhz: i32) -> Self {
        Self {
            handle,
            rect,
            refresh_mhz,
            workspaces: Vec::new(),
            current: None,
            history: History::default(),
        }
    }

    /// Adds the workspace to the set this output may display. The first
    /// workspace added becomes current.
    pub fn add_workspace(&mut self, workspace: WorkspaceId) -> bool {
        if self.workspaces.contains(&workspace) {
            return false;
        }
        self.workspaces.push(workspace);
        if self.current.is_none() {
            self.current = Some(workspace);
            self.history.shift(workspace);
        }
        true
    }

    /// Removes the workspace. If it was current, the output falls back to
    /// its workspace history, then to any remaining member.
    pub fn remove_workspace(&mut self, workspace: WorkspaceId) -> bool {
        let Some(index) = self.workspaces.iter().position(|w| *w == workspace) else {
            return false;
        };
        self.workspaces.remove(index);
        self.history.remove(workspace);
        if self.current == Some(workspace) {
            self.current = self.history.top().or_else(|| self.workspaces.first().copied());
        }
        true
    }

    /// Rejected as a no-op if the workspace is not a member of this output.
    pub fn switch_to(&mut self, workspace: WorkspaceId) -> bool {
        if !self.workspaces.contains(&workspace) {
            return false;
        }
        self.current = Some(workspace);
        self.history.shift(workspace);
        true
    }

    #[must_use]
    pub fn current_workspace(&self) -> Option<WorkspaceId> {
        self.current
    }

    #[must_use]
    pub fn contains(&self, workspace: WorkspaceId) -> bool {
        self.workspaces.contains(&workspace)
    }

    #[must_use]
    pub fn workspaces(&self) -> &[WorkspaceId] {
        &self.workspaces
    }
}
