use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};
use crate::DisplayEvent;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Route one backend event to its handler.
    /// Returns true if the event changed the model.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        match event {
            DisplayEvent::SurfaceCreate {
                handle,
                role,
                title,
                app_id,
            } => self.state.surface_created_handler(handle, role, title, app_id),
            DisplayEvent::SurfaceAck(handle, serial) => {
                self.state.surface_ack_handler(handle, serial)
            }
            DisplayEvent::SurfaceCommit(handle) => self.state.surface_commit_handler(handle),
            DisplayEvent::SurfaceDestroy(handle) => self.state.surface_destroyed_handler(handle),
            DisplayEvent::SurfaceTitleChange(handle, title) => {
                self.state.surface_title_handler(handle, title)
            }
            DisplayEvent::SurfaceAppIdChange(handle, app_id) => {
                self.state.surface_app_id_handler(handle, app_id)
            }
            DisplayEvent::OutputCreate(handle, rect, refresh_mhz) => {
                let created = self.state.output_created_handler(handle, rect, refresh_mhz);
                if created {
                    // Start this output's frame loop.
                    self.display_server.schedule_frame(handle);
                }
                created
            }
            DisplayEvent::OutputDestroy(handle) => self.state.output_destroyed_handler(handle),
            DisplayEvent::FrameTick(handle) => self.frame_tick_handler(handle),
            DisplayEvent::InputCreate(handle, kind, name) => {
                self.state.input_created_handler(handle, kind, name)
            }
            DisplayEvent::InputDestroy(handle) => self.state.input_destroyed_handler(handle),
        }
    }
}
