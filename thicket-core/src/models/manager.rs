use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::Handle;
use crate::state::State;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// # Errors
    ///
    /// Fails when the display server cannot be reached.
    pub fn new(config: C) -> Result<Self> {
        let display_server = SERVER::new(&config)?;

        Ok(Self {
            state: State::new(&config),
            config,
            display_server,
        })
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    >
{
    pub fn new_test(desktops: Vec<String>) -> Self {
        Self::new_test_with_rules(desktops, vec![])
    }

    pub fn new_test_with_rules(
        desktops: Vec<String>,
        rules: Vec<crate::rules::WindowRule>,
    ) -> Self {
        let config = crate::config::TestConfig { desktops, rules };
        Self {
            state: State::new(&config),
            display_server: crate::display_servers::MockDisplayServer::default(),
            config,
        }
    }
}
