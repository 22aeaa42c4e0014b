use super::{Config, DisplayEvent, DisplayServer};
use crate::display_action::DisplayAction;
use crate::errors::{OrielError, Result};
use crate::models::{Handle, OutputHandle, RenderPass};

use std::collections::VecDeque;

/// Records everything the core asks of the backend, so tests can assert on
/// whole frames and action streams.
#[derive(Default)]
pub struct MockDisplayServer<H: Handle> {
    pub events: VecDeque<DisplayEvent<H>>,
    pub actions: Vec<DisplayAction<H>>,
    pub submitted: Vec<RenderPass<H>>,
    pub committed: Vec<OutputHandle<H>>,
    pub scheduled: Vec<OutputHandle<H>>,
    pub fail_begin_render: bool,
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Result<Self> {
        Ok(Self::default())
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        self.events.drain(..).collect()
    }

    fn execute_action(&mut self, act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        self.actions.push(act);
        None
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn Future<Output = ()>>> {
        // The mock never produces readiness on its own; tests drive handlers
        // directly instead of spinning the loop.
        Box::pin(std::future::pending::<()>())
    }

    fn begin_render(&mut self, output: OutputHandle<H>) -> Result<RenderPass<H>> {
        if self.fail_begin_render {
            return Err(OrielError::Render("mock render target refused".to_owned()));
        }
        Ok(RenderPass::new(output))
    }

    fn submit(&mut self, pass: RenderPass<H>) -> Result<()> {
        self.submitted.push(pass);
        Ok(())
    }

    fn commit_output(&mut self, output: OutputHandle<H>) -> Result<()> {
        self.committed.push(output);
        Ok(())
    }

    fn schedule_frame(&mut self, output: OutputHandle<H>) {
        self.scheduled.push(output);
    }
}
