use super::{Handle, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// The root window and the area windows are laid out in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Screen<H: Handle> {
    #[serde(bound = "")]
    pub root: WindowHandle<H>,
    pub xyhw: Xyhw,
}

impl<H: Handle> Screen<H> {
    #[must_use]
    pub const fn new(root: WindowHandle<H>, xyhw: Xyhw) -> Self {
        Self { root, xyhw }
    }
}
