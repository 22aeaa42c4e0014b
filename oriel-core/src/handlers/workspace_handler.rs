//! Workspace lifecycle and the output/workspace binding.

use crate::models::{Handle, OutputHandle, Workspace, WorkspaceId};
use crate::state::State;
use crate::utils::event_hub::HubEvent;

impl<H: Handle> State<H> {
    /// Create a workspace and attach it to the focused output, if there is
    /// one. Duplicate ids are rejected as a no-op.
    pub fn create_workspace(
        &mut self,
        layout: Option<String>,
        id: WorkspaceId,
        name: String,
    ) -> bool {
        if self.workspace(id).is_some() {
            tracing::debug!("duplicate workspace id {}", id);
            return false;
        }
        let layout = layout.unwrap_or_else(|| self.default_layout.clone());
        self.workspaces.push(Workspace::new(id, name, layout));
        let target = self.focused_output.or_else(|| self.outputs.first().map(|o| o.handle));
        if let Some(output) = target.and_then(|handle| self.output_mut(handle)) {
            output.add_workspace(id);
        }
        self.notify(HubEvent::WorkspaceCreated(id));
        true
    }

    /// Destroy a workspace. Member windows are re-homed to the first
    /// surviving workspace, or detached if none survives; outputs showing it
    /// fall back through their workspace history.
    pub fn destroy_workspace(&mut self, id: WorkspaceId) -> bool {
        let Some(index) = self.workspaces.iter().position(|ws| ws.id == id) else {
            return false;
        };
        let members: Vec<_> = self.workspaces[index].windows().to_vec();
        let fallback = self.workspaces.iter().find(|ws| ws.id != id).map(|ws| ws.id);

        for window in members {
            if let Some(w) = self.window_mut(window) {
                w.workspace = fallback;
            }
            match fallback {
                Some(to) => {
                    if let Some(ws) = self.workspace_mut(to) {
                        ws.add_window(window);
                    }
                    self.notify(HubEvent::WindowWorkspaceChanged {
                        window,
                        from: Some(id),
                        to,
                    });
                }
                None => tracing::debug!("window {} left without a workspace", window),
            }
        }

        let mut switches = Vec::new();
        for output in &mut self.outputs {
            let was_current = output.current_workspace() == Some(id);
            if output.remove_workspace(id) && was_current {
                if let Some(current) = output.current_workspace() {
                    output.history.shift(current);
                    switches.push((output.handle, current));
                }
            }
        }
        for (handle, current) in switches {
            self.notify(HubEvent::WorkspaceSwitched(handle, current));
        }

        self.workspaces.remove(index);
        self.notify(HubEvent::WorkspaceDestroyed(id));
        if let Some(to) = fallback {
            self.request_arrange(to);
        }
        true
    }

    /// Show a workspace on an output. Rejected as a no-op if the workspace
    /// is not a member of that output's set.
    pub fn switch_to_workspace(&mut self, output: OutputHandle<H>, workspace: WorkspaceId) -> bool {
        let Some(out) = self.output_mut(output) else {
            return false;
        };
        if out.current_workspace() == Some(workspace) {
            return false;
        }
        if !out.switch_to(workspace) {
            tracing::debug!("workspace {} is not on output {:?}", workspace, output);
            return false;
        }
        self.notify(HubEvent::WorkspaceSwitched(output, workspace));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::models::{MockHandle, Rect};

    fn state() -> State<MockHandle> {
        let mut state = State::new(&TestConfig::default());
        state.output_created_handler(OutputHandle(1), Rect::default(), 60_000);
        state.create_workspace(None, 1, "main".to_owned());
        state
    }

    #[test]
    fn duplicate_workspace_ids_should_be_rejected() {
        let mut state = state();
        assert!(!state.create_workspace(None, 1, "again".to_owned()));
        assert_eq!(state.workspaces.len(), 1);
    }

    #[test]
    fn destroying_a_workspace_should_rehome_its_windows() {
        let mut state = state();
        state.create_workspace(None, 2, "second".to_owned());
        let id = state.create_window(2, None, None).expect("window");

        assert!(state.destroy_workspace(2));
        assert!(state.workspace(2).is_none());
        assert_eq!(state.window(id).expect("window").workspace, Some(1));
        assert!(state.workspace(1).expect("workspace").contains(id));
    }

    #[test]
    fn destroying_the_last_workspace_should_detach_its_windows() {
        let mut state = state();
        let id = state.create_window(1, None, None).expect("window");
        assert!(state.destroy_workspace(1));
        assert_eq!(state.window(id).expect("window").workspace, None);
    }

    #[test]
    fn destroying_the_shown_workspace_should_fall_back_on_the_output() {
        let mut state = state();
        state.create_workspace(None, 2, "second".to_owned());
        assert!(state.switch_to_workspace(OutputHandle(1), 2));
        assert!(state.destroy_workspace(2));
        let output = state.output(OutputHandle(1)).expect("output");
        assert_eq!(output.current_workspace(), Some(1));
    }

    #[test]
    fn switching_to_a_foreign_workspace_should_be_rejected() {
        let mut state = state();
        assert!(!state.switch_to_workspace(OutputHandle(1), 99));
        let output = state.output(OutputHandle(1)).expect("output");
        assert_eq!(output.current_workspace(), Some(1));
    }
}
