use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThicketError>;

#[derive(Debug, Error)]
pub enum ThicketError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unable to connect to the display server: {0}")]
    ConnectionFailed(String),
    #[error("Unable to find the root window.")]
    RootWindowNotFound,
    #[error("Another window manager is already running.")]
    AnotherWindowManager,
}
