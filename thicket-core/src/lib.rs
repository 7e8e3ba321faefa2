//! The event-synchronization core of thicket.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layout;
pub mod models;
pub mod rules;
pub mod state;

pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::{
    ClientMessage, ClientMessageKind, ConfigureRequest, DisplayEvent, MapRequest,
    WindowAttributes, WindowHints,
};
pub use display_servers::DisplayServer;
pub use errors::{Result, ThicketError};
pub use models::Manager;
pub use state::State;
