//! Client surface state and the propose/acknowledge/commit negotiation.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

use super::{Handle, Serial, SurfaceHandle};

/// The role a client surface was created with. The variant set is closed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRole {
    Toplevel,
    Popup,
}

/// The state negotiated with the client. Position is deliberately absent:
/// placement is server-owned and never negotiated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceState {
    /// Zero means the client picks its own size.
    pub width: i32,
    pub height: i32,
    pub maximized: bool,
    pub fullscreen: bool,
    pub activated: bool,
}

/// Where a surface currently is in the negotiation cycle. Derived from the
/// sent/acked serials so it can never desynchronize from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationPhase {
    /// Nothing outstanding; covers both "never configured" and "between
    /// negotiations".
    Idle,
    /// A configure was sent and the client has not acknowledged it yet.
    AwaitingAck,
    /// The latest configure was acknowledged; the state is adopted on the
    /// client's next commit.
    AwaitingCommit,
}

/// Outcome of one client commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The pending state became current.
    Adopted { state: SurfaceState, first: bool },
    /// No acknowledged proposal was outstanding; only the content changed.
    ContentOnly { first: bool },
}

/// A configure the caller must forward to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configure {
    pub serial: Serial,
    pub state: SurfaceState,
}

/// One client-visible drawable region and its negotiation protocol.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Surface<H: Handle> {
    #[serde(bound = "")]
    pub handle: SurfaceHandle<H>,
    pub role: SurfaceRole,
    pending: SurfaceState,
    current: SurfaceState,
    last_serial: Serial,
    sent: Option<Serial>,
    acked: Option<Serial>,
    /// Set by the first commit ever.
    pub initialized: bool,
}

impl<H: Handle> Surface<H> {
    #[must_use]
    pub fn new(handle: SurfaceHandle<H>, role: SurfaceRole) -> Self {
        Self {
            handle,
            role,
            pending: SurfaceState::default(),
            current: SurfaceState::default(),
            last_serial: 0,
            sent: None,
            acked: None,
            initialized: false,
        }
    }

    #[must_use]
    pub fn current(&self) -> SurfaceState {
        self.current
    }

    #[must_use]
    pub fn pending(&self) -> SurfaceState {
        self.pending
    }

    #[must_use]
    pub fn phase(&self) -> NegotiationPhase {
        match (self.sent, self.acked) {
            (None, _) => NegotiationPhase::Idle,
            (Some(sent), Some(acked)) if sent == acked => NegotiationPhase::AwaitingCommit,
            (Some(_), _) => NegotiationPhase::AwaitingAck,
        }
    }

    /// True when nothing is outstanding and nothing is staged.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.sent.is_none() && self.pending == self.current
    }

    /// Stage a server-side state change. Returns the configure to forward to
    /// the client, or `None` for a surface that has never committed: sending
    /// a configure to an uninitialized surface is a protocol anomaly, so the
    /// staged state accumulates and is flushed after the first commit.
    ///
    /// A new proposal always supersedes an outstanding one; only the latest
    /// serial can win the negotiation.
    pub fn propose_with(&mut self, f: impl FnOnce(&mut SurfaceState)) -> Option<Configure> {
        f(&mut self.pending);
        if !self.initialized {
            return None;
        }
        Some(self.send_configure())
    }

    /// Emit any state staged before the surface was initialized. Call after a
    /// commit, once a configure may legally be sent.
    pub fn flush_staged(&mut self) -> Option<Configure> {
        if self.initialized && self.sent.is_none() && self.pending != self.current {
            return Some(self.send_configure());
        }
        None
    }

    fn send_configure(&mut self) -> Configure {
        self.last_serial += 1;
        self.sent = Some(self.last_serial);
        Configure {
            serial: self.last_serial,
            state: self.pending,
        }
    }

    /// Client acknowledgement of a configure. Returns `false` for a stale or
    /// unknown serial, which has no effect: only the most recent outstanding
    /// serial wins, all earlier ones are superseded.
    pub fn acknowledge(&mut self, serial: Serial) -> bool {
        if self.sent == Some(serial) {
            self.acked = Some(serial);
            return true;
        }
        tracing::debug!("ignoring stale ack of serial {}", serial);
        false
    }

    /// Client commit. Adopts the pending state if the latest configure was
    /// acknowledged, otherwise it is a content-only commit.
    pub fn commit(&mut self) -> Commit {
        let first = !self.initialized;
        self.initialized = true;
        if self.sent.is_some() && self.sent == self.acked {
            self.sent = None;
            self.acked = None;
            self.current = self.pending;
            return Commit::Adopted {
                state: self.current,
                first,
            };
        }
        Commit::ContentOnly { first }
    }
}
