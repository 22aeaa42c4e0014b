mod headless_display_server;
#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::{Handle, OutputHandle, RenderPass};
use crate::DisplayEvent;

use std::pin::Pin;

pub use self::headless_display_server::{HeadlessDisplayServer, HeadlessHandle};
#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The boundary to the backend: surface transport, displays, input devices
/// and the render primitives. Everything behind it is a black box to the
/// core.
pub trait DisplayServer<H: Handle> {
    /// Fatal setup failures surface here; the process must not reach the
    /// event loop on `Err`.
    fn new(config: &impl Config) -> Result<Self>
    where
        Self: Sized;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    /// May synchronously answer with a follow-up event.
    fn execute_action(&mut self, _act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        None
    }

    /// Resolves once backend I/O is ready to produce events.
    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self) {}

    /// Begin a render pass for one output. Failure aborts that frame only.
    fn begin_render(&mut self, output: OutputHandle<H>) -> Result<RenderPass<H>>;

    fn submit(&mut self, pass: RenderPass<H>) -> Result<()>;

    /// Commit the output's state to the backend after a submitted pass.
    fn commit_output(&mut self, output: OutputHandle<H>) -> Result<()>;

    /// Ask for a `FrameTick` for this output once the next frame is due.
    fn schedule_frame(&mut self, _output: OutputHandle<H>) {}
}
