//! A backend with no hardware behind it: virtual outputs on a timer and a
//! synthetic, well-behaved client that acknowledges every configure. Used by
//! the demo binary and for end-to-end tests of the negotiation protocol.
#![allow(clippy::module_name_repetitions)]

use super::{Config, DisplayEvent, DisplayServer};
use crate::display_action::DisplayAction;
use crate::errors::{OrielError, Result};
use crate::models::{Handle, OutputHandle, Rect, RenderPass, SurfaceHandle, SurfaceRole};

use std::collections::VecDeque;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::Instant;

pub type HeadlessHandle = u64;
impl Handle for HeadlessHandle {}

pub struct HeadlessDisplayServer {
    events: VecDeque<DisplayEvent<HeadlessHandle>>,
    /// Frame period per output.
    outputs: Vec<(OutputHandle<HeadlessHandle>, Duration)>,
    /// Armed frame timers.
    frames: Vec<(OutputHandle<HeadlessHandle>, Instant)>,
    next_handle: HeadlessHandle,
    /// The most recent submitted pass per output.
    pub last_frames: Vec<RenderPass<HeadlessHandle>>,
}

impl HeadlessDisplayServer {
    /// Hand the core a synthetic client surface, as if a client connected.
    /// The surface arrives already committed, the way a real client maps
    /// itself by committing its first buffer.
    pub fn announce_surface(
        &mut self,
        role: SurfaceRole,
        title: Option<String>,
        app_id: Option<String>,
    ) -> SurfaceHandle<HeadlessHandle> {
        self.next_handle += 1;
        let handle = SurfaceHandle(self.next_handle);
        self.events.push_back(DisplayEvent::SurfaceCreate {
            handle,
            role,
            title,
            app_id,
        });
        self.events.push_back(DisplayEvent::SurfaceCommit(handle));
        handle
    }
}

impl DisplayServer<HeadlessHandle> for HeadlessDisplayServer {
    fn new(config: &impl Config) -> Result<Self> {
        let configured = config.outputs();
        if configured.is_empty() {
            return Err(OrielError::Setup(
                "headless backend needs at least one output".to_owned(),
            ));
        }
        let mut server = Self {
            events: VecDeque::new(),
            outputs: Vec::new(),
            frames: Vec::new(),
            next_handle: 0,
            last_frames: Vec::new(),
        };
        for output in configured {
            server.next_handle += 1;
            let handle = OutputHandle(server.next_handle);
            let refresh = if output.refresh_mhz > 0 {
                output.refresh_mhz
            } else {
                60_000
            };
            let period = Duration::from_micros(1_000_000_000 / refresh as u64);
            server.outputs.push((handle, period));
            server.events.push_back(DisplayEvent::OutputCreate(
                handle,
                Rect {
                    x: output.x,
                    y: output.y,
                    width: output.width,
                    height: output.height,
                },
                refresh,
            ));
        }
        Ok(server)
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<HeadlessHandle>> {
        let mut events: Vec<_> = self.events.drain(..).collect();
        let now = Instant::now();
        let mut index = 0;
        while index < self.frames.len() {
            if self.frames[index].1 <= now {
                let (handle, _) = self.frames.remove(index);
                events.push(DisplayEvent::FrameTick(handle));
            } else {
                index += 1;
            }
        }
        events
    }

    fn execute_action(
        &mut self,
        act: DisplayAction<HeadlessHandle>,
    ) -> Option<DisplayEvent<HeadlessHandle>> {
        match act {
            // The synthetic client applies whatever it is asked to.
            DisplayAction::ConfigureSurface { handle, serial, .. } => {
                self.events.push_back(DisplayEvent::SurfaceCommit(handle));
                Some(DisplayEvent::SurfaceAck(handle, serial))
            }
            DisplayAction::CloseSurface(handle) => Some(DisplayEvent::SurfaceDestroy(handle)),
        }
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        if !self.events.is_empty() {
            return Box::pin(std::future::ready(()));
        }
        match self.frames.iter().map(|(_, at)| *at).min() {
            Some(at) => Box::pin(async move {
                tokio::time::sleep_until(at).await;
            }),
            None => Box::pin(std::future::pending::<()>()),
        }
    }

    fn begin_render(&mut self, output: OutputHandle<HeadlessHandle>) -> Result<RenderPass<HeadlessHandle>> {
        Ok(RenderPass::new(output))
    }

    fn submit(&mut self, pass: RenderPass<HeadlessHandle>) -> Result<()> {
        self.last_frames.retain(|p| p.output != pass.output);
        self.last_frames.push(pass);
        Ok(())
    }

    fn commit_output(&mut self, _output: OutputHandle<HeadlessHandle>) -> Result<()> {
        Ok(())
    }

    fn schedule_frame(&mut self, output: OutputHandle<HeadlessHandle>) {
        if self.frames.iter().any(|(handle, _)| *handle == output) {
            return;
        }
        if let Some((_, period)) = self.outputs.iter().find(|(handle, _)| *handle == output) {
            self.frames.push((output, Instant::now() + *period));
        }
    }
}
