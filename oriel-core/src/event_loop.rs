use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};
use crate::utils::event_hub::HubEvent;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Run the compositor until `State::stop` is called.
    ///
    /// One iteration: wait for backend I/O, handle the buffered events,
    /// dispatch hub notifications until quiescent, then drain the queued
    /// display actions (which may synchronously answer with more events).
    pub async fn event_loop(mut self) {
        self.state.notify(HubEvent::ServerStarted);
        self.dispatch_notifications();

        let mut event_buffer = vec![];
        while self.state.running {
            self.display_server.flush();

            tokio::select! {
                () = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                else => {
                    event_buffer.drain(..).for_each(|event| {
                        let _ = self.display_event_handler(event);
                    });
                }
            }

            self.dispatch_notifications();

            while let Some(act) = self.state.actions.pop_front() {
                if let Some(event) = self.display_server.execute_action(act) {
                    event_buffer.push(event);
                }
            }
        }

        // Let ServerStopping subscribers see the final state.
        self.dispatch_notifications();
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TestConfig;
    use crate::display_servers::{DisplayServer, HeadlessDisplayServer, HeadlessHandle};
    use crate::models::{Manager, SurfaceRole};
    use crate::utils::event_hub::EventKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    // One full pass through the loop: output + surface arrive, a hook
    // resizes the new window, the synthetic client acks and commits, frames
    // render, and the loop stops from a hook.
    #[tokio::test]
    async fn a_headless_round_trip_should_negotiate_and_render() {
        let mut manager: Manager<HeadlessHandle, TestConfig, HeadlessDisplayServer> =
            Manager::new(TestConfig::default()).expect("headless backend");
        manager.display_server.announce_surface(
            SurfaceRole::Toplevel,
            Some("demo".to_owned()),
            None,
        );

        let negotiated = Rc::new(RefCell::new(None));
        let frames = Rc::new(RefCell::new(0u32));

        let seen = Rc::clone(&negotiated);
        manager
            .hub
            .subscribe(Some(EventKind::WindowCreated), move |state, _| {
                let id = state.windows[0].id;
                state.resize_window(id, 800, 600);
            });
        let counter = Rc::clone(&frames);
        manager
            .hub
            .subscribe(Some(EventKind::OutputFrame), move |state, _| {
                *counter.borrow_mut() += 1;
                if *counter.borrow() >= 2 {
                    state.stop();
                }
            });
        manager
            .hub
            .subscribe(Some(EventKind::ServerStopping), move |state, _| {
                let window = &state.windows[0];
                *seen.borrow_mut() =
                    Some((window.width(), window.height(), window.mapped, window.ready));
            });

        manager.event_loop().await;

        assert!(*frames.borrow() >= 2);
        assert_eq!(*negotiated.borrow(), Some((800, 600, true, true)));
    }

    #[test]
    fn a_config_without_outputs_should_fail_setup() {
        let config = TestConfig {
            outputs: vec![],
            ..TestConfig::default()
        };
        assert!(HeadlessDisplayServer::new(&config).is_err());
    }
}
