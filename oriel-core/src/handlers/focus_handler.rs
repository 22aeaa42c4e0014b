//! Focus movement and cycling across a workspace's windows.

use crate::models::{Handle, WindowId};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Focus a window on its workspace. No-op for unknown windows and for
    /// windows not attached to any workspace. The previously focused
    /// window's client is told it lost activation.
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        let Some(workspace) = self.window(id).and_then(|w| w.workspace) else {
            return false;
        };
        let previous = {
            let Some(ws) = self.workspace_mut(workspace) else {
                return false;
            };
            let previous = ws.focused_window();
            if previous == Some(id) {
                return false;
            }
            if !ws.focus_window(id) {
                return false;
            }
            previous
        };
        if let Some(previous) = previous {
            self.propose(previous, |s| s.activated = false);
        }
        self.propose(id, |s| s.activated = true);
        true
    }

    /// Cycle focus forward through the focused workspace's windows,
    /// wrapping at the end.
    pub fn focus_next_window(&mut self) -> bool {
        self.cycle_focus(1)
    }

    /// Cycle focus backward, wrapping at the start.
    pub fn focus_previous_window(&mut self) -> bool {
        self.cycle_focus(-1)
    }

    fn cycle_focus(&mut self, direction: i32) -> bool {
        let Some(workspace) = self.focused_workspace() else {
            return false;
        };
        let members: Vec<WindowId> = workspace
            .windows()
            .iter()
            .copied()
            .filter(|id| {
                self.window(*id)
                    .is_some_and(|w| w.mapped && !w.minimized)
            })
            .collect();
        if members.is_empty() {
            return false;
        }
        let next = match workspace
            .focused_window()
            .and_then(|f| members.iter().position(|id| *id == f))
        {
            Some(index) => {
                let len = members.len() as i32;
                members[((index as i32 + direction).rem_euclid(len)) as usize]
            }
            None => members[0],
        };
        self.focus_window(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::models::{MockHandle, OutputHandle, Rect};

    fn state_with_output() -> State<MockHandle> {
        let mut state = State::new(&TestConfig::default());
        state.create_workspace(None, 1, "main".to_owned());
        state.output_created_handler(OutputHandle(1), Rect::default(), 60_000);
        state
    }

    #[test]
    fn focusing_a_window_should_make_it_the_workspace_focus() {
        let mut state = state_with_output();
        let a = state.create_window(1, None, None).expect("window");
        let b = state.create_window(1, None, None).expect("window");
        assert!(state.focus_window(a));
        assert!(state.focus_window(b));
        assert_eq!(state.focused_window_id(), Some(b));
        // Focusing the focused window is a no-op.
        assert!(!state.focus_window(b));
    }

    #[test]
    fn cycling_should_wrap_around_the_member_list() {
        let mut state = state_with_output();
        let windows: Vec<_> = (0..3)
            .map(|_| state.create_window(1, None, None).expect("window"))
            .collect();
        state.focus_window(windows[2]);
        assert!(state.focus_next_window());
        assert_eq!(state.focused_window_id(), Some(windows[0]));
        assert!(state.focus_previous_window());
        assert_eq!(state.focused_window_id(), Some(windows[2]));
    }

    #[test]
    fn cycling_an_empty_workspace_should_be_a_no_op() {
        let mut state = state_with_output();
        assert!(!state.focus_next_window());
        assert!(!state.focus_previous_window());
    }

    #[test]
    fn focus_should_always_be_empty_or_a_live_member() {
        // Drive a deterministic pseudo-random add/remove/focus sequence and
        // check the liveness invariant after every step.
        let mut state = state_with_output();
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut windows: Vec<WindowId> = Vec::new();
        for _ in 0..500 {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let roll = (seed >> 33) % 3;
            match roll {
                0 => {
                    let id = state.create_window(1, None, None).expect("window");
                    windows.push(id);
                }
                1 if !windows.is_empty() => {
                    let victim = windows.remove((seed >> 17) as usize % windows.len());
                    state.close_window(victim);
                }
                2 if !windows.is_empty() => {
                    let pick = windows[(seed >> 11) as usize % windows.len()];
                    state.focus_window(pick);
                }
                _ => {}
            }
            let workspace = state.workspace(1).expect("workspace");
            if let Some(focused) = workspace.focused_window() {
                assert!(workspace.contains(focused));
                assert!(state.window(focused).is_some());
            }
        }
    }
}
