//! Pluggable window arrangement strategies.
//!
//! A strategy is invoked when a workspace's membership changes. It may
//! reposition and resize member windows through the window command surface;
//! there is no other contract.

mod even_horizontal;
mod floating;

use std::collections::HashMap;

use crate::models::{Handle, WorkspaceId};
use crate::state::State;

pub use even_horizontal::EvenHorizontal;
pub use floating::Floating;

pub const FLOATING: &str = "Floating";
pub const EVEN_HORIZONTAL: &str = "EvenHorizontal";

pub trait LayoutStrategy<H: Handle> {
    fn arrange(&self, state: &mut State<H>, workspace: WorkspaceId);
}

/// Maps layout names to strategies. Owned by the manager; never a global.
pub struct LayoutRegistry<H: Handle> {
    layouts: HashMap<String, Box<dyn LayoutStrategy<H>>>,
}

impl<H: Handle> Default for LayoutRegistry<H> {
    fn default() -> Self {
        let mut registry = Self {
            layouts: HashMap::new(),
        };
        registry.register(FLOATING, Floating);
        registry.register(EVEN_HORIZONTAL, EvenHorizontal);
        registry
    }
}

impl<H: Handle> LayoutRegistry<H> {
    pub fn register(&mut self, name: &str, layout: impl LayoutStrategy<H> + 'static) {
        self.layouts.insert(name.to_owned(), Box::new(layout));
    }

    /// Unknown layout names arrange nothing, logged once per call.
    pub fn arrange(&self, name: &str, state: &mut State<H>, workspace: WorkspaceId) {
        match self.layouts.get(name) {
            Some(layout) => layout.arrange(state, workspace),
            None => tracing::debug!("no layout named {} registered", name),
        }
    }
}
