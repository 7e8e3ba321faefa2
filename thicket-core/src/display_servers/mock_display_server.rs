use super::Config;
use super::DisplayAction;
use super::DisplayEvent;
use super::DisplayServer;
use crate::errors::Result;
use crate::models::Handle;
use std::collections::VecDeque;

/// Feeds queued events to the event loop and records what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct MockDisplayServer<H: Handle> {
    pub events: VecDeque<DisplayEvent<H>>,
    pub executed: Vec<DisplayAction<H>>,
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Result<Self> {
        Ok(Self {
            events: VecDeque::new(),
            executed: vec![],
        })
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        self.events.drain(..).collect()
    }

    fn execute_action(&mut self, act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        self.executed.push(act);
        None
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        if self.events.is_empty() {
            Box::pin(futures::future::pending())
        } else {
            Box::pin(futures::future::ready(()))
        }
    }

    fn flush(&self) {}
}
