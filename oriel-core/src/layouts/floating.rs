use crate::models::{Handle, WorkspaceId};
use crate::state::State;

use super::LayoutStrategy;

/// Leaves every window where the client or the user put it.
pub struct Floating;

impl<H: Handle> LayoutStrategy<H> for Floating {
    fn arrange(&self, _state: &mut State<H>, _workspace: WorkspaceId) {}
}
