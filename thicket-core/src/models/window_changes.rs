use super::{Handle, WindowHandle};
use serde::{Deserialize, Serialize};

/// Stacking requested through a configure request.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StackMode {
    Above,
    Below,
    TopIf,
    BottomIf,
    Opposite,
}

/// The fields of a configure request, a field is `Some` only when it was present in the request's
/// value mask.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct WindowChanges<H: Handle> {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub border_width: Option<u32>,
    #[serde(bound = "")]
    pub sibling: Option<WindowHandle<H>>,
    pub stack_mode: Option<StackMode>,
}

impl<H: Handle> WindowChanges<H> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
