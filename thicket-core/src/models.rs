//! Objects (such as windows and desktops) used by the thicket core.
mod desktop;
mod manager;
mod node;
mod screen;
mod window;
mod window_changes;
mod window_location;
mod window_state;
mod window_type;
mod xyhw;

pub use desktop::Desktop;
pub use manager::Manager;
pub use node::{Node, NodeId, Orientation};
pub use screen::Screen;
pub use window::{Client, Handle, MockHandle, WindowHandle};
pub use window_changes::{StackMode, WindowChanges};
pub use window_location::WindowLocation;
pub use window_state::{StateAction, WindowState};
pub use window_type::WindowType;
pub use xyhw::Xyhw;

pub type DesktopId = usize;
