//! The canonical object model: every window, workspace, output and input
//! the compositor knows about, plus the queues the manager drains.

use crate::DisplayAction;
use crate::config::Config;
use crate::models::{
    Handle, InputDevice, Output, OutputHandle, SurfaceHandle, Window, WindowId, Workspace,
    WorkspaceId,
};
use crate::utils::event_hub::HubEvent;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Debug)]
pub struct State<H: Handle> {
    #[serde(bound = "")]
    pub windows: Vec<Window<H>>,
    pub workspaces: Vec<Workspace>,
    #[serde(bound = "")]
    pub outputs: Vec<Output<H>>,
    #[serde(bound = "")]
    pub inputs: Vec<InputDevice<H>>,
    /// Commands for the display server, drained by the manager.
    #[serde(bound = "")]
    pub actions: VecDeque<DisplayAction<H>>,
    /// Hub notifications awaiting dispatch, drained by the manager.
    #[serde(bound = "")]
    pub notifications: VecDeque<HubEvent<H>>,
    /// Workspaces whose membership changed and whose layout must rerun.
    pub pending_arrange: Vec<WorkspaceId>,
    /// The event loop exits once this clears.
    pub running: bool,
    #[serde(bound = "")]
    pub focused_output: Option<OutputHandle<H>>,
    pub focus_new_windows: bool,
    pub default_layout: String,
    next_window_id: WindowId,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            windows: Vec::new(),
            workspaces: Vec::new(),
            outputs: Vec::new(),
            inputs: Vec::new(),
            actions: VecDeque::new(),
            notifications: VecDeque::new(),
            pending_arrange: Vec::new(),
            running: true,
            focused_output: None,
            focus_new_windows: config.focus_new_windows(),
            default_layout: config.default_layout(),
            next_window_id: 0,
        }
    }

    /// Ask the event loop to exit. `ServerStopping` goes out first so
    /// subscribers can still inspect the full state.
    pub fn stop(&mut self) {
        if self.running {
            self.notify(HubEvent::ServerStopping);
            self.running = false;
        }
    }

    pub(crate) fn notify(&mut self, event: HubEvent<H>) {
        self.notifications.push_back(event);
    }

    pub(crate) fn request_arrange(&mut self, workspace: WorkspaceId) {
        if !self.pending_arrange.contains(&workspace) {
            self.pending_arrange.push(workspace);
        }
    }

    pub(crate) fn next_window_id(&mut self) -> WindowId {
        self.next_window_id += 1;
        self.next_window_id
    }

    #[must_use]
    pub fn window(&self, id: WindowId) -> Option<&Window<H>> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window<H>> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    #[must_use]
    pub fn window_by_surface(&self, handle: SurfaceHandle<H>) -> Option<&Window<H>> {
        self.windows
            .iter()
            .find(|w| w.surface_handle() == Some(handle))
    }

    pub fn window_by_surface_mut(&mut self, handle: SurfaceHandle<H>) -> Option<&mut Window<H>> {
        self.windows
            .iter_mut()
            .find(|w| w.surface_handle() == Some(handle))
    }

    #[must_use]
    pub fn workspace(&self, id: WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.id == id)
    }

    pub fn workspace_mut(&mut self, id: WorkspaceId) -> Option<&mut Workspace> {
        self.workspaces.iter_mut().find(|w| w.id == id)
    }

    #[must_use]
    pub fn output(&self, handle: OutputHandle<H>) -> Option<&Output<H>> {
        self.outputs.iter().find(|o| o.handle == handle)
    }

    pub fn output_mut(&mut self, handle: OutputHandle<H>) -> Option<&mut Output<H>> {
        self.outputs.iter_mut().find(|o| o.handle == handle)
    }

    /// The current workspace of the focused output.
    #[must_use]
    pub fn focused_workspace_id(&self) -> Option<WorkspaceId> {
        let handle = self.focused_output?;
        self.output(handle)?.current_workspace()
    }

    #[must_use]
    pub fn focused_workspace(&self) -> Option<&Workspace> {
        self.workspace(self.focused_workspace_id()?)
    }

    /// The focused window of the focused output's current workspace.
    #[must_use]
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.focused_workspace()?.focused_window()
    }

    /// The output that displays this workspace, if any does.
    #[must_use]
    pub fn output_showing(&self, workspace: WorkspaceId) -> Option<&Output<H>> {
        self.outputs.iter().find(|o| o.contains(workspace))
    }

    /// The topmost mapped, non-minimized window of the focused output's
    /// current workspace at a point, most-recently-used first.
    #[must_use]
    pub fn window_at(&self, x: i32, y: i32) -> Option<WindowId> {
        let workspace = self.focused_workspace()?;
        workspace.stacking_order().into_iter().find(|id| {
            self.window(*id).is_some_and(|w| {
                w.mapped && !w.minimized && w.contains_point(x, y)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TestConfig;
    use crate::models::MockHandle;

    use super::*;

    #[test]
    fn stop_should_publish_server_stopping_before_clearing_running() {
        let mut state: State<MockHandle> = State::new(&TestConfig::default());
        state.stop();
        assert!(!state.running);
        assert_eq!(state.notifications.pop_back(), Some(HubEvent::ServerStopping));
        // A second stop publishes nothing.
        state.stop();
        assert!(state.notifications.is_empty());
    }
}
