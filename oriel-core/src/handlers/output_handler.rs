//! Display arrival and removal.

use crate::models::{Handle, Output, OutputHandle, Rect};
use crate::state::State;
use crate::utils::event_hub::HubEvent;

impl<H: Handle> State<H> {
    /// A display appeared. It adopts every workspace no other output claims;
    /// the first output becomes the focused one.
    pub fn output_created_handler(
        &mut self,
        handle: OutputHandle<H>,
        rect: Rect,
        refresh_mhz: i32,
    ) -> bool {
        if self.output(handle).is_some() {
            tracing::debug!("output {:?} announced twice", handle);
            return false;
        }
        let mut output = Output::new(handle, rect, refresh_mhz);
        let unclaimed: Vec<_> = self
            .workspaces
            .iter()
            .map(|ws| ws.id)
            .filter(|ws| self.output_showing(*ws).is_none())
            .collect();
        for workspace in unclaimed {
            output.add_workspace(workspace);
        }
        self.outputs.push(output);
        if self.focused_output.is_none() {
            self.focused_output = Some(handle);
        }
        self.notify(HubEvent::OutputCreated(handle));
        true
    }

    /// A display went away. Its workspaces are re-homed to the first
    /// surviving output, keeping their windows.
    pub fn output_destroyed_handler(&mut self, handle: OutputHandle<H>) -> bool {
        let Some(index) = self.outputs.iter().position(|o| o.handle == handle) else {
            tracing::debug!("destroy for unknown output {:?}", handle);
            return false;
        };
        let orphaned = self.outputs.remove(index);
        if let Some(survivor) = self.outputs.first_mut() {
            for workspace in orphaned.workspaces() {
                survivor.add_workspace(*workspace);
            }
        }
        if self.focused_output == Some(handle) {
            self.focused_output = self.outputs.first().map(|o| o.handle);
        }
        self.notify(HubEvent::OutputDestroyed(handle));
        true
    }
}
