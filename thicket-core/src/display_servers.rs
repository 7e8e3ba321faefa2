use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::Handle;
use crate::DisplayEvent;
use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
mod mock_display_server;
#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

pub trait DisplayServer<H: Handle> {
    /// # Errors
    ///
    /// Fails when the display server cannot be reached or refuses us as its window manager.
    fn new(config: &impl Config) -> Result<Self>
    where
        Self: Sized;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    fn execute_action(&mut self, _act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        None
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);
}
