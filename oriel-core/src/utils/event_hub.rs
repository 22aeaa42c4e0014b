//! Typed publish/subscribe registry for entity lifecycle notifications.
//!
//! Handlers run synchronously, in registration order, on the compositor
//! thread. A hook may be owned by an entity; those hooks are dropped
//! automatically when the entity's destruction event is dispatched.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

use crate::models::{Handle, InputHandle, OutputHandle, RenderPass, WindowId, WorkspaceId};
use crate::state::State;

/// A notification published through the hub.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum HubEvent<H: Handle> {
    ServerStarted,
    ServerStopping,
    #[serde(bound = "")]
    OutputCreated(OutputHandle<H>),
    #[serde(bound = "")]
    OutputDestroyed(OutputHandle<H>),
    /// Published once per rendered frame, after the draw pass was built.
    #[serde(bound = "")]
    OutputFrame(OutputHandle<H>),
    #[serde(bound = "")]
    InputCreated(InputHandle<H>),
    #[serde(bound = "")]
    InputDestroyed(InputHandle<H>),
    WindowCreated(WindowId),
    WindowMoved(WindowId),
    WindowResized(WindowId),
    WindowMapped(WindowId),
    WindowUnmapped(WindowId),
    WindowClosed(WindowId),
    WindowTitleChanged(WindowId),
    WindowAppIdChanged(WindowId),
    WindowWorkspaceChanged {
        window: WindowId,
        from: Option<WorkspaceId>,
        to: WorkspaceId,
    },
    WorkspaceCreated(WorkspaceId),
    WorkspaceDestroyed(WorkspaceId),
    #[serde(bound = "")]
    WorkspaceSwitched(OutputHandle<H>, WorkspaceId),
}

/// The discriminant of a `HubEvent`, used to subscribe to one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ServerStarted,
    ServerStopping,
    OutputCreated,
    OutputDestroyed,
    OutputFrame,
    InputCreated,
    InputDestroyed,
    WindowCreated,
    WindowMoved,
    WindowResized,
    WindowMapped,
    WindowUnmapped,
    WindowClosed,
    WindowTitleChanged,
    WindowAppIdChanged,
    WindowWorkspaceChanged,
    WorkspaceCreated,
    WorkspaceDestroyed,
    WorkspaceSwitched,
}

impl<H: Handle> HubEvent<H> {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ServerStarted => EventKind::ServerStarted,
            Self::ServerStopping => EventKind::ServerStopping,
            Self::OutputCreated(_) => EventKind::OutputCreated,
            Self::OutputDestroyed(_) => EventKind::OutputDestroyed,
            Self::OutputFrame(_) => EventKind::OutputFrame,
            Self::InputCreated(_) => EventKind::InputCreated,
            Self::InputDestroyed(_) => EventKind::InputDestroyed,
            Self::WindowCreated(_) => EventKind::WindowCreated,
            Self::WindowMoved(_) => EventKind::WindowMoved,
            Self::WindowResized(_) => EventKind::WindowResized,
            Self::WindowMapped(_) => EventKind::WindowMapped,
            Self::WindowUnmapped(_) => EventKind::WindowUnmapped,
            Self::WindowClosed(_) => EventKind::WindowClosed,
            Self::WindowTitleChanged(_) => EventKind::WindowTitleChanged,
            Self::WindowAppIdChanged(_) => EventKind::WindowAppIdChanged,
            Self::WindowWorkspaceChanged { .. } => EventKind::WindowWorkspaceChanged,
            Self::WorkspaceCreated(_) => EventKind::WorkspaceCreated,
            Self::WorkspaceDestroyed(_) => EventKind::WorkspaceDestroyed,
            Self::WorkspaceSwitched(..) => EventKind::WorkspaceSwitched,
        }
    }
}

pub type HookId = u32;

/// The entity a hook's lifetime is tied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOwner<H: Handle> {
    Window(WindowId),
    Workspace(WorkspaceId),
    Output(OutputHandle<H>),
}

struct Hook<H: Handle> {
    id: HookId,
    /// `None` subscribes to every event.
    kind: Option<EventKind>,
    owner: Option<HookOwner<H>>,
    callback: Box<dyn FnMut(&mut State<H>, &HubEvent<H>)>,
}

struct FrameHook<H: Handle> {
    id: HookId,
    callback: Box<dyn FnMut(&mut State<H>, &mut RenderPass<H>)>,
}

pub struct EventHub<H: Handle> {
    hooks: Vec<Hook<H>>,
    frame_hooks: Vec<FrameHook<H>>,
    next_id: HookId,
}

impl<H: Handle> Default for EventHub<H> {
    fn default() -> Self {
        Self {
            hooks: Vec::new(),
            frame_hooks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<H: Handle> EventHub<H> {
    pub fn subscribe(
        &mut self,
        kind: Option<EventKind>,
        callback: impl FnMut(&mut State<H>, &HubEvent<H>) + 'static,
    ) -> HookId {
        self.subscribe_owned(kind, None, callback)
    }

    /// Subscribe with the hook's lifetime tied to an entity: the hook is
    /// dropped when that entity's destruction event is dispatched.
    pub fn subscribe_owned(
        &mut self,
        kind: Option<EventKind>,
        owner: Option<HookOwner<H>>,
        callback: impl FnMut(&mut State<H>, &HubEvent<H>) + 'static,
    ) -> HookId {
        self.next_id += 1;
        self.hooks.push(Hook {
            id: self.next_id,
            kind,
            owner,
            callback: Box::new(callback),
        });
        self.next_id
    }

    pub fn unsubscribe(&mut self, id: HookId) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|h| h.id != id);
        before != self.hooks.len()
    }

    /// Register a hook that runs during the render pipeline, after the window
    /// pass was built, to composite overlay content.
    pub fn add_frame_hook(
        &mut self,
        callback: impl FnMut(&mut State<H>, &mut RenderPass<H>) + 'static,
    ) -> HookId {
        self.next_id += 1;
        self.frame_hooks.push(FrameHook {
            id: self.next_id,
            callback: Box::new(callback),
        });
        self.next_id
    }

    pub fn remove_frame_hook(&mut self, id: HookId) -> bool {
        let before = self.frame_hooks.len();
        self.frame_hooks.retain(|h| h.id != id);
        before != self.frame_hooks.len()
    }

    /// Run every matching hook, in registration order.
    pub fn dispatch(&mut self, state: &mut State<H>, event: &HubEvent<H>) {
        let kind = event.kind();
        for hook in &mut self.hooks {
            if hook.kind.is_none() || hook.kind == Some(kind) {
                (hook.callback)(state, event);
            }
        }
    }

    pub fn run_frame_hooks(&mut self, state: &mut State<H>, pass: &mut RenderPass<H>) {
        for hook in &mut self.frame_hooks {
            (hook.callback)(state, pass);
        }
    }

    /// Drop hooks owned by an entity this event destroyed. Called after the
    /// event was dispatched, so owned hooks still see their own teardown.
    pub fn prune(&mut self, event: &HubEvent<H>) {
        let dead = match *event {
            HubEvent::WindowClosed(id) => HookOwner::Window(id),
            HubEvent::WorkspaceDestroyed(id) => HookOwner::Workspace(id),
            HubEvent::OutputDestroyed(handle) => HookOwner::Output(handle),
            _ => return,
        };
        self.hooks.retain(|h| h.owner != Some(dead));
    }
}
