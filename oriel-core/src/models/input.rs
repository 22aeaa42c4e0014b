//! Input devices, tracked but not decoded.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};

use super::{Handle, InputHandle};

/// The kind of an input device. The variant set is closed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Keyboard,
    Pointer,
    Switch,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InputDevice<H: Handle> {
    #[serde(bound = "")]
    pub handle: InputHandle<H>,
    pub kind: InputKind,
    pub name: String,
}

impl<H: Handle> InputDevice<H> {
    #[must_use]
    pub fn new(handle: InputHandle<H>, kind: InputKind, name: String) -> Self {
        Self { handle, kind, name }
    }
}
