//! The window-management core of the oriel compositor toolkit.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of oriel-core is to do one thing and to do that one thing
// well: track windows and get them on screen.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
pub mod state;
pub mod utils;

pub use config::{Config, OutputConfig, WorkspaceConfig};
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use display_servers::DisplayServer;
pub use models::Manager;
pub use models::Output;
pub use models::Surface;
pub use models::Window;
pub use models::Workspace;
pub use state::State;
pub use utils::event_hub::{EventHub, EventKind, HookId, HookOwner, HubEvent};
