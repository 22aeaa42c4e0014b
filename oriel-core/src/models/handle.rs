//! Backend-agnostic identity types.
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific handles need to implement.
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + Send + 'static
{
}

/// Handle for testing purposes.
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// Sequence number of one configure in the propose/acknowledge/commit
/// negotiation. Unique and strictly increasing per surface.
pub type Serial = u32;

/// A backend-agnostic handle to a client surface used to identify it.
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour
/// with the compiler, so as suggested by [this `serde` issue][serde-issue],
/// just adding `#[serde(bound = "")]` everywhere the generic is declared fixes
/// the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// A backend-agnostic handle to a display output.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// A backend-agnostic handle to an input device.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;
