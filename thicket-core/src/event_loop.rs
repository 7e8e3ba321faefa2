use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::{Handle, Manager};
use crate::{Config, DisplayEvent};
use std::collections::VecDeque;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Run until interrupted.
    ///
    /// Events are handled strictly one after another, the actions an event causes are carried
    /// out before the next event is looked at.
    ///
    /// # Errors
    ///
    /// Fails when the interrupt signal cannot be listened for.
    pub async fn start_event_loop(&mut self) -> Result<()> {
        let mut event_buffer = VecDeque::new();
        loop {
            self.display_server.flush();

            tokio::select! {
                () = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.extend(self.display_server.get_next_events());
                }
                interrupted = tokio::signal::ctrl_c(), if event_buffer.is_empty() => {
                    interrupted?;
                    tracing::info!("Interrupted, leaving the event loop");
                    break;
                }
                else => {
                    if let Some(event) = event_buffer.pop_front() {
                        self.process_event(event, &mut event_buffer);
                    }
                }
            }
        }
        Ok(())
    }

    /// Dispatch one event and execute every action it queued. Events produced by the actions are
    /// appended to `event_buffer`.
    fn process_event(&mut self, event: DisplayEvent<H>, event_buffer: &mut VecDeque<DisplayEvent<H>>) {
        tracing::trace!("Dispatching {:?}", event);
        if !self.display_event_handler(event) {
            tracing::trace!("Nothing changed");
        }

        while let Some(act) = self.state.actions.pop_front() {
            tracing::trace!("Executing {:?}", act);
            if let Some(event) = self.display_server.execute_action(act) {
                event_buffer.push_back(event);
            }
        }
    }
}
