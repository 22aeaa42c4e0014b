//! The window command surface: creation, placement, visual state and close.
//!
//! For surfaced windows, size and visual-state changes go through the
//! surface negotiation; the window fields update when the client commits.
//! Headless windows have no client and mutate immediately. Position is
//! server-owned and applies immediately for both kinds.

use crate::display_action::DisplayAction;
use crate::models::{Handle, SurfaceState, Window, WindowId, WorkspaceId};
use crate::state::State;
use crate::utils::event_hub::HubEvent;

#[derive(Clone, Copy)]
enum WindowFlag {
    Maximized,
    Fullscreened,
}

impl<H: Handle> State<H> {
    /// Create a headless window on the given workspace.
    pub fn create_window(
        &mut self,
        workspace: WorkspaceId,
        title: Option<String>,
        app_id: Option<String>,
    ) -> Option<WindowId> {
        self.workspace(workspace)?;
        let id = self.next_window_id();
        let mut window = Window::new(id, None, title, app_id);
        window.workspace = Some(workspace);
        if let Some(ws) = self.workspace_mut(workspace) {
            ws.add_window(id);
        }
        self.windows.push(window);
        self.notify(HubEvent::WindowCreated(id));
        self.request_arrange(workspace);
        if self.focus_new_windows {
            self.focus_window(id);
        }
        Some(id)
    }

    /// Close a window: it leaves every collection now; a surfaced client is
    /// asked to end its surface on the way out.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        if let Some(surface) = window.detach_surface() {
            self.actions
                .push_back(DisplayAction::CloseSurface(surface.handle));
        }
        self.remove_window(id)
    }

    /// Shared teardown: focus reassignment happens before the window leaves
    /// the canonical collection.
    pub(crate) fn remove_window(&mut self, id: WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| w.id == id) else {
            return false;
        };
        let workspace = self.windows[index].workspace;
        if let Some(ws) = workspace.and_then(|ws| self.workspace_mut(ws)) {
            ws.remove_window(id);
        }
        self.windows.remove(index);
        self.notify(HubEvent::WindowClosed(id));
        if let Some(ws) = workspace {
            self.request_arrange(ws);
        }
        true
    }

    pub fn move_window(&mut self, id: WindowId, x: i32, y: i32) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        if (window.x(), window.y()) == (x, y) {
            return false;
        }
        window.set_position(x, y);
        window.mark_dirty();
        self.notify(HubEvent::WindowMoved(id));
        true
    }

    /// Degenerate sizes are rejected as a no-op, not an error.
    pub fn resize_window(&mut self, id: WindowId, width: i32, height: i32) -> bool {
        if width < 1 || height < 1 {
            return false;
        }
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        if window.is_headless() {
            if (window.width(), window.height()) == (width, height) {
                return false;
            }
            window.set_size(width, height);
            window.mark_dirty();
            self.notify(HubEvent::WindowResized(id));
            return true;
        }
        // Idempotence is judged against the latest proposed size, so asking
        // for the committed size back still supersedes an outstanding
        // proposal. A zero pending dimension means the client picks; the
        // committed fields stand in for it.
        let target = window.surface.as_ref().map(|s| {
            let pending = s.pending();
            (
                if pending.width > 0 { pending.width } else { window.width() },
                if pending.height > 0 { pending.height } else { window.height() },
            )
        });
        if target == Some((width, height)) {
            return false;
        }
        self.propose(id, |s| {
            s.width = width;
            s.height = height;
        })
    }

    pub fn maximize_window(&mut self, id: WindowId) -> bool {
        self.set_window_flag(id, WindowFlag::Maximized, true)
    }

    pub fn unmaximize_window(&mut self, id: WindowId) -> bool {
        self.set_window_flag(id, WindowFlag::Maximized, false)
    }

    pub fn fullscreen_window(&mut self, id: WindowId) -> bool {
        self.set_window_flag(id, WindowFlag::Fullscreened, true)
    }

    pub fn unfullscreen_window(&mut self, id: WindowId) -> bool {
        self.set_window_flag(id, WindowFlag::Fullscreened, false)
    }

    /// Minimized state is server-owned; it is never negotiated.
    pub fn minimize_window(&mut self, id: WindowId) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        if window.minimized {
            return false;
        }
        window.minimized = true;
        window.mark_dirty();
        self.notify(HubEvent::WindowUnmapped(id));
        true
    }

    pub fn unminimize_window(&mut self, id: WindowId) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        if !window.minimized {
            return false;
        }
        window.minimized = false;
        window.mark_dirty();
        self.notify(HubEvent::WindowMapped(id));
        true
    }

    pub fn set_window_title(&mut self, id: WindowId, title: String) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        window.title = Some(title);
        self.notify(HubEvent::WindowTitleChanged(id));
        true
    }

    pub fn set_window_app_id(&mut self, id: WindowId, app_id: String) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        window.app_id = Some(app_id);
        self.notify(HubEvent::WindowAppIdChanged(id));
        true
    }

    /// Move a window between workspaces: detach-then-attach with no
    /// observable half-state, then focus it on the new workspace.
    pub fn set_workspace(&mut self, id: WindowId, workspace: WorkspaceId) -> bool {
        if self.workspace(workspace).is_none() {
            tracing::debug!("cannot move window {} to unknown workspace {}", id, workspace);
            return false;
        }
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        let from = window.workspace;
        if from == Some(workspace) {
            return false;
        }
        window.workspace = Some(workspace);
        if let Some(old) = from.and_then(|ws| self.workspace_mut(ws)) {
            old.remove_window(id);
        }
        if let Some(new) = self.workspace_mut(workspace) {
            new.add_window(id);
        }
        self.focus_window(id);
        self.notify(HubEvent::WindowWorkspaceChanged {
            window: id,
            from,
            to: workspace,
        });
        if let Some(old) = from {
            self.request_arrange(old);
        }
        self.request_arrange(workspace);
        true
    }

    /// Idempotent flag mutator. Surfaced windows negotiate the change, the
    /// window field follows the commit; headless ones apply it now.
    fn set_window_flag(&mut self, id: WindowId, flag: WindowFlag, value: bool) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        let current = match flag {
            WindowFlag::Maximized => window.maximized,
            WindowFlag::Fullscreened => window.fullscreened,
        };
        if current == value {
            return false;
        }
        if window.is_headless() {
            match flag {
                WindowFlag::Maximized => window.maximized = value,
                WindowFlag::Fullscreened => window.fullscreened = value,
            }
            window.mark_dirty();
            return true;
        }
        self.propose(id, move |s| match flag {
            WindowFlag::Maximized => s.maximized = value,
            WindowFlag::Fullscreened => s.fullscreen = value,
        })
    }

    /// Stage a state change on the window's surface and queue the configure
    /// when one may be sent.
    pub(crate) fn propose(
        &mut self,
        id: WindowId,
        f: impl FnOnce(&mut SurfaceState),
    ) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        let Some(surface) = window.surface.as_mut() else {
            return false;
        };
        let handle = surface.handle;
        if let Some(configure) = surface.propose_with(f) {
            self.actions.push_back(DisplayAction::ConfigureSurface {
                handle,
                state: configure.state,
                serial: configure.serial,
            });
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::models::{MockHandle, SurfaceHandle, SurfaceRole};

    fn state() -> State<MockHandle> {
        let mut state = State::new(&TestConfig::default());
        state.create_workspace(None, 1, "main".to_owned());
        state
    }

    #[test]
    fn degenerate_resizes_should_leave_the_window_untouched() {
        let mut state = state();
        let id = state.create_window(1, None, None).expect("window");
        let window = state.window_mut(id).expect("window");
        window.set_size(300, 200);
        window.drawn();

        assert!(!state.resize_window(id, 0, 5));
        assert!(!state.resize_window(id, 5, 0));
        let window = state.window(id).expect("window");
        assert_eq!((window.width(), window.height()), (300, 200));
        assert!(!window.dirty());
    }

    #[test]
    fn maximize_should_be_idempotent() {
        let mut state = state();
        let id = state.create_window(1, None, None).expect("window");
        assert!(state.maximize_window(id));
        assert!(!state.maximize_window(id));
        assert!(state.window(id).expect("window").maximized);
        assert!(state.unmaximize_window(id));
        assert!(!state.unmaximize_window(id));
    }

    #[test]
    fn a_surfaced_resize_should_negotiate_instead_of_mutating() {
        let mut state = state();
        let handle = SurfaceHandle(5);
        state.surface_created_handler(handle, SurfaceRole::Toplevel, None, None);
        state.surface_commit_handler(handle);
        let id = state.window_by_surface(handle).expect("window").id;

        assert!(state.resize_window(id, 800, 600));
        // Nothing observable until the client commits.
        let window = state.window(id).expect("window");
        assert_eq!((window.width(), window.height()), (640, 480));
        assert!(matches!(
            state.actions.back(),
            Some(DisplayAction::ConfigureSurface { .. })
        ));
    }

    #[test]
    fn resizing_back_to_the_committed_size_should_supersede_the_proposal() {
        let mut state = state();
        let handle = SurfaceHandle(8);
        state.surface_created_handler(handle, SurfaceRole::Toplevel, None, None);
        state.surface_commit_handler(handle);
        let id = state.window_by_surface(handle).expect("window").id;

        assert!(state.resize_window(id, 800, 600));
        // The window is still at its committed 640x480; asking for that back
        // must not be swallowed, or the outstanding 800x600 would win.
        assert!(state.resize_window(id, 640, 480));
        let Some(DisplayAction::ConfigureSurface { state: proposed, serial, .. }) =
            state.actions.back()
        else {
            panic!("expected a configure");
        };
        assert_eq!((proposed.width, proposed.height), (640, 480));
        assert_eq!(*serial, 2);
        // Repeating the latest proposal is the actual no-op.
        assert!(!state.resize_window(id, 640, 480));
    }

    #[test]
    fn moving_between_workspaces_should_leave_exactly_one_membership() {
        let mut state = state();
        state.create_workspace(None, 2, "second".to_owned());
        let id = state.create_window(1, None, None).expect("window");

        assert!(state.set_workspace(id, 2));
        assert!(!state.workspace(1).expect("workspace").contains(id));
        assert!(state.workspace(2).expect("workspace").contains(id));
        assert_eq!(state.window(id).expect("window").workspace, Some(2));
        assert_eq!(state.workspace(2).expect("workspace").focused_window(), Some(id));
        // Moving to the workspace it is already on is a no-op.
        assert!(!state.set_workspace(id, 2));
    }

    #[test]
    fn closing_a_surfaced_window_should_ask_the_client_to_end_it() {
        let mut state = state();
        let handle = SurfaceHandle(6);
        state.surface_created_handler(handle, SurfaceRole::Toplevel, None, None);
        let id = state.window_by_surface(handle).expect("window").id;

        assert!(state.close_window(id));
        assert!(state.window(id).is_none());
        assert!(state
            .actions
            .contains(&DisplayAction::CloseSurface(handle)));
    }

    #[test]
    fn minimize_should_publish_an_unmap_notification() {
        let mut state = state();
        let id = state.create_window(1, None, None).expect("window");
        state.notifications.clear();
        assert!(state.minimize_window(id));
        assert!(state.notifications.contains(&HubEvent::WindowUnmapped(id)));
        assert!(!state.minimize_window(id));
        assert!(state.unminimize_window(id));
        assert!(state.notifications.contains(&HubEvent::WindowMapped(id)));
    }
}
