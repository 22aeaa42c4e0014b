mod handle;
mod history;
mod input;
mod manager;
mod output;
mod render;
mod surface;
mod window;
mod workspace;

pub use handle::{Handle, InputHandle, MockHandle, OutputHandle, Serial, SurfaceHandle};
pub use history::History;
pub use input::{InputDevice, InputKind};
pub use manager::Manager;
pub use output::{Output, Rect};
pub use render::{DrawCommand, RenderPass};
pub use surface::{Commit, Configure, NegotiationPhase, Surface, SurfaceRole, SurfaceState};
pub use window::{Window, WindowId};
pub use workspace::{Workspace, WorkspaceId};
