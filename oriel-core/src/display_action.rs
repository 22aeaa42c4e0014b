use crate::models::{Handle, Serial, SurfaceHandle, SurfaceState};
use serde::{Deserialize, Serialize};

/// These are responses from the window-management core.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Forward a proposed state to the client. The client answers with a
    /// `SurfaceAck` for the serial and a `SurfaceCommit` once applied.
    #[serde(bound = "")]
    ConfigureSurface {
        handle: SurfaceHandle<H>,
        state: SurfaceState,
        serial: Serial,
    },

    /// Nicely ask a client to end the surface at its convenience. Teardown
    /// happens when its destroy notification arrives.
    #[serde(bound = "")]
    CloseSurface(SurfaceHandle<H>),
}
