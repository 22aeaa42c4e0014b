//! Surface transport events: creation, the acknowledge/commit half of the
//! negotiation, metadata changes and client-side teardown.

use crate::display_action::DisplayAction;
use crate::models::{Commit, Handle, Serial, Surface, SurfaceHandle, SurfaceRole, Window};
use crate::state::State;
use crate::utils::event_hub::HubEvent;

impl<H: Handle> State<H> {
    /// A client surface arrived; wrap it in a window on the focused output's
    /// current workspace.
    pub fn surface_created_handler(
        &mut self,
        handle: SurfaceHandle<H>,
        role: SurfaceRole,
        title: Option<String>,
        app_id: Option<String>,
    ) -> bool {
        // Don't add the window if we already know about the surface.
        if self.window_by_surface(handle).is_some() {
            tracing::debug!("surface {:?} announced twice", handle);
            return false;
        }
        let id = self.next_window_id();
        let mut window = Window::new(id, Some(Surface::new(handle, role)), title, app_id);
        let workspace = self
            .focused_workspace_id()
            .or_else(|| self.workspaces.first().map(|ws| ws.id));
        window.workspace = workspace;
        if let Some(ws) = workspace.and_then(|ws| self.workspace_mut(ws)) {
            ws.add_window(id);
        }
        self.windows.push(window);
        self.notify(HubEvent::WindowCreated(id));
        if let Some(ws) = workspace {
            self.request_arrange(ws);
        }
        if self.focus_new_windows {
            self.focus_window(id);
        }
        true
    }

    /// The client acknowledged a configure. Stale serials are ignored.
    pub fn surface_ack_handler(&mut self, handle: SurfaceHandle<H>, serial: Serial) -> bool {
        let Some(window) = self.window_by_surface_mut(handle) else {
            tracing::debug!("ack for unknown surface {:?}", handle);
            return false;
        };
        match window.surface.as_mut() {
            Some(surface) => surface.acknowledge(serial),
            None => false,
        }
    }

    /// The client committed. Adopt the pending state if the negotiation
    /// completed, otherwise treat it as a content-only commit.
    pub fn surface_commit_handler(&mut self, handle: SurfaceHandle<H>) -> bool {
        let Some(window) = self.window_by_surface_mut(handle) else {
            tracing::debug!("commit for unknown surface {:?}", handle);
            return false;
        };
        let id = window.id;
        let Some(surface) = window.surface.as_mut() else {
            return false;
        };
        let commit = surface.commit();
        // Anything staged before the surface initialized goes out now.
        let configure = surface.flush_staged();
        let settled = surface.is_settled();

        let mut resized = false;
        match commit {
            Commit::Adopted { state, .. } => {
                resized = window.apply_committed(state);
                window.ready = true;
            }
            Commit::ContentOnly { .. } => window.mark_dirty(),
        }
        if settled {
            window.ready = true;
        }
        let first_map = !window.mapped;
        window.mapped = true;

        if let Some(configure) = configure {
            self.actions.push_back(DisplayAction::ConfigureSurface {
                handle,
                state: configure.state,
                serial: configure.serial,
            });
        }
        if first_map {
            self.notify(HubEvent::WindowMapped(id));
        }
        if resized {
            self.notify(HubEvent::WindowResized(id));
        }
        true
    }

    /// The client destroyed the surface, possibly mid-negotiation. The window
    /// goes with it; its fields keep the last committed geometry while the
    /// teardown notifications run.
    pub fn surface_destroyed_handler(&mut self, handle: SurfaceHandle<H>) -> bool {
        let Some(window) = self.window_by_surface_mut(handle) else {
            tracing::debug!("destroy for unknown surface {:?}", handle);
            return false;
        };
        let id = window.id;
        window.detach_surface();
        self.remove_window(id)
    }

    pub fn surface_title_handler(&mut self, handle: SurfaceHandle<H>, title: String) -> bool {
        let Some(window) = self.window_by_surface_mut(handle) else {
            return false;
        };
        let id = window.id;
        window.title = Some(title);
        self.notify(HubEvent::WindowTitleChanged(id));
        true
    }

    pub fn surface_app_id_handler(&mut self, handle: SurfaceHandle<H>, app_id: String) -> bool {
        let Some(window) = self.window_by_surface_mut(handle) else {
            return false;
        };
        let id = window.id;
        window.app_id = Some(app_id);
        self.notify(HubEvent::WindowAppIdChanged(id));
        true
    }
}
