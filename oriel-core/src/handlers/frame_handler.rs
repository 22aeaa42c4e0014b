//! The per-frame render pipeline, driven by output frame ticks.
//!
//! A failed begin/submit/commit aborts that frame only; the next tick is
//! still scheduled and retries independently.

use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager, OutputHandle, Rect};
use crate::utils::event_hub::HubEvent;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    pub fn frame_tick_handler(&mut self, handle: OutputHandle<H>) -> bool {
        let Some((rect, workspace)) = self
            .state
            .output(handle)
            .map(|o| (o.rect, o.current_workspace()))
        else {
            tracing::debug!("frame tick for unknown output {:?}", handle);
            return false;
        };

        let mut pass = match self.display_server.begin_render(handle) {
            Ok(pass) => pass,
            Err(err) => {
                tracing::warn!("dropping frame on {:?}: {}", handle, err);
                self.display_server.schedule_frame(handle);
                return false;
            }
        };

        // Base layer across the whole output.
        pass.rect(rect);

        // Windows draw back to front, the most-recently-focused one last.
        // They are redrawn every tick; the content texture is re-sampled
        // from the client only while dirty.
        let order = workspace
            .and_then(|id| self.state.workspace(id))
            .map(|ws| ws.render_order())
            .unwrap_or_default();
        for id in order {
            let Some(window) = self.state.window_mut(id) else {
                continue;
            };
            if !window.mapped || window.minimized {
                continue;
            }
            let geometry = Rect {
                x: window.x(),
                y: window.y(),
                width: window.width(),
                height: window.height(),
            };
            match window.surface_handle() {
                Some(surface) => pass.texture(surface, geometry, window.dirty()),
                None => pass.rect(geometry),
            }
            window.drawn();
        }

        // Overlay content from the application layer.
        self.hub.run_frame_hooks(&mut self.state, &mut pass);
        self.state.notify(HubEvent::OutputFrame(handle));

        if let Err(err) = self.display_server.submit(pass) {
            tracing::warn!("submit failed on {:?}: {}", handle, err);
            self.display_server.schedule_frame(handle);
            return false;
        }
        if let Err(err) = self.display_server.commit_output(handle) {
            tracing::warn!("output commit failed on {:?}: {}", handle, err);
        }
        self.display_server.schedule_frame(handle);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TestConfig;
    use crate::models::{DrawCommand, Manager, OutputHandle, Rect, SurfaceHandle, SurfaceRole};
    use crate::DisplayEvent;

    fn manager_with_output() -> Manager<
        crate::models::MockHandle,
        TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    > {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.display_event_handler(DisplayEvent::OutputCreate(
            OutputHandle(1),
            Rect {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
            },
            60_000,
        ));
        manager
    }

    #[test]
    fn windows_should_draw_back_to_front() {
        let mut manager = manager_with_output();
        let a = manager.state.create_window(1, None, None).expect("window");
        let b = manager.state.create_window(1, None, None).expect("window");
        manager.state.move_window(a, 10, 0);
        manager.state.move_window(b, 20, 0);
        manager.state.focus_window(b);
        manager.state.focus_window(a);

        assert!(manager.frame_tick_handler(OutputHandle(1)));
        let pass = manager.display_server.submitted.pop().expect("one frame");
        let xs: Vec<i32> = pass
            .commands
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::Rect(rect) | DrawCommand::Texture { rect, .. } => rect.x,
            })
            .collect();
        // Base layer, then b (older focus), then a (current focus) on top.
        assert_eq!(xs, vec![0, 20, 10]);
    }

    #[test]
    fn minimized_windows_should_not_draw() {
        let mut manager = manager_with_output();
        let id = manager.state.create_window(1, None, None).expect("window");
        manager.state.minimize_window(id);
        manager.frame_tick_handler(OutputHandle(1));
        let pass = manager.display_server.submitted.pop().expect("one frame");
        // Only the base layer.
        assert_eq!(pass.commands.len(), 1);
    }

    #[test]
    fn a_failed_render_pass_should_only_cost_that_frame() {
        let mut manager = manager_with_output();
        manager.display_server.fail_begin_render = true;
        assert!(!manager.frame_tick_handler(OutputHandle(1)));
        assert!(manager.display_server.submitted.is_empty());
        // The next tick is still scheduled.
        assert!(manager
            .display_server
            .scheduled
            .contains(&OutputHandle(1)));
    }

    #[test]
    fn content_should_only_resample_while_dirty() {
        let mut manager = manager_with_output();
        let handle = SurfaceHandle(7);
        manager
            .state
            .surface_created_handler(handle, SurfaceRole::Toplevel, None, None);
        manager.state.surface_commit_handler(handle);

        manager.frame_tick_handler(OutputHandle(1));
        let first = manager.display_server.submitted.pop().expect("frame");
        assert!(matches!(
            first.commands[1],
            DrawCommand::Texture { resample: true, .. }
        ));

        // No new commit arrived, so the second frame reuses the texture.
        manager.frame_tick_handler(OutputHandle(1));
        let second = manager.display_server.submitted.pop().expect("frame");
        assert!(matches!(
            second.commands[1],
            DrawCommand::Texture { resample: false, .. }
        ));
    }
}
