use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::layouts::LayoutRegistry;
use crate::models::Handle;
use crate::state::State;
use crate::utils::event_hub::EventHub;

/// The root object: owns the canonical state, the hub, the layout registry
/// and the backend, and drives everything from the event loop.
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub hub: EventHub<H>,
    pub layouts: LayoutRegistry<H>,
    pub display_server: SERVER,
}

impl<H: Handle, C, SERVER> Manager<H, C, SERVER>
where
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// # Errors
    ///
    /// Fails when the backend cannot be constructed; the caller must not run
    /// the event loop in that case.
    pub fn new(config: C) -> Result<Self> {
        let display_server = SERVER::new(&config)?;
        let mut state = State::new(&config);
        for workspace in config.workspaces() {
            state.create_workspace(workspace.layout, workspace.id, workspace.name);
        }
        Ok(Self {
            state,
            config,
            hub: EventHub::default(),
            layouts: LayoutRegistry::default(),
            display_server,
        })
    }

    /// Drain queued hub notifications and layout requests until quiescent.
    /// Hooks and layouts may queue more of either; they are processed in the
    /// same pass.
    pub fn dispatch_notifications(&mut self) {
        loop {
            if let Some(event) = self.state.notifications.pop_front() {
                self.hub.dispatch(&mut self.state, &event);
                self.hub.prune(&event);
                continue;
            }
            if self.state.pending_arrange.is_empty() {
                break;
            }
            for id in std::mem::take(&mut self.state.pending_arrange) {
                let Some(layout) = self.state.workspace(id).map(|ws| ws.layout.clone()) else {
                    continue;
                };
                self.layouts.arrange(&layout, &mut self.state, id);
            }
        }
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    >
{
    pub fn new_test(config: crate::config::TestConfig) -> Self {
        Self::new(config).expect("the mock backend cannot fail to construct")
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TestConfig;
    use crate::models::Manager;

    #[test]
    fn new_should_create_the_configured_workspaces() {
        let manager = Manager::new_test(TestConfig::default());
        assert_eq!(manager.state.workspaces.len(), 1);
        let workspace = &manager.state.workspaces[0];
        assert_eq!(workspace.id, 1);
        assert_eq!(workspace.name, "main");
        assert_eq!(workspace.layout, crate::layouts::FLOATING);
    }
}
