//! Input device arrival and removal. Devices are tracked and announced;
//! decoding their events is the backend's business.

use crate::models::{Handle, InputDevice, InputHandle, InputKind};
use crate::state::State;
use crate::utils::event_hub::HubEvent;

impl<H: Handle> State<H> {
    pub fn input_created_handler(
        &mut self,
        handle: InputHandle<H>,
        kind: InputKind,
        name: String,
    ) -> bool {
        if self.inputs.iter().any(|i| i.handle == handle) {
            tracing::debug!("input {:?} announced twice", handle);
            return false;
        }
        self.inputs.push(InputDevice::new(handle, kind, name));
        self.notify(HubEvent::InputCreated(handle));
        true
    }

    pub fn input_destroyed_handler(&mut self, handle: InputHandle<H>) -> bool {
        let before = self.inputs.len();
        self.inputs.retain(|i| i.handle != handle);
        if self.inputs.len() == before {
            return false;
        }
        self.notify(HubEvent::InputDestroyed(handle));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::models::MockHandle;

    #[test]
    fn devices_should_be_tracked_by_kind_and_name() {
        let mut state: State<MockHandle> = State::new(&TestConfig::default());
        state.input_created_handler(InputHandle(1), InputKind::Keyboard, "kbd0".to_owned());
        state.input_created_handler(InputHandle(2), InputKind::Pointer, "mouse0".to_owned());
        assert_eq!(state.inputs.len(), 2);
        assert!(!state.input_created_handler(InputHandle(1), InputKind::Switch, "lid".to_owned()));
        assert!(state.input_destroyed_handler(InputHandle(1)));
        assert!(!state.input_destroyed_handler(InputHandle(1)));
        assert_eq!(state.inputs.len(), 1);
    }
}
