use anyhow::Result;
use thicket_core::Manager;
use xlib_display_server::{XlibDisplayServer, XlibWindowHandle};

fn main() -> Result<()> {
    if let Err(err) = thicket::utils::log::setup_logging() {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
    }
    tracing::info!("thicket booting...");

    let rt = tokio::runtime::Runtime::new()?;
    // The backend spawns its socket watcher on this runtime.
    let _rt_guard = rt.enter();

    let config = thicket::load();
    let mut manager = Manager::<XlibWindowHandle, thicket::Config, XlibDisplayServer>::new(config)?;

    match rt.block_on(manager.start_event_loop()) {
        Ok(()) => tracing::info!("Completed"),
        Err(err) => {
            tracing::error!("Completed with event loop error: {}", err);
            return Err(err.into());
        }
    }
    Ok(())
}
