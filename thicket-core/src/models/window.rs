//! Window Information
use std::fmt::Debug;
use std::hash::Hash;

use crate::models::Xyhw;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize
    + DeserializeOwned
    + Debug
    + Clone
    + Copy
    + PartialEq
    + Eq
    + Hash
    + Default
    + Send
    + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour with the compiler, so
/// as suggested by [this `serde` issue][serde-issue], just adding `#[serde(bound = "")]`
/// everywhere the generic is declared fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// The record of one managed top-level window.
///
/// A client only ever lives inside a [`crate::models::Node`], it is created and dropped together
/// with the node that holds it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Client<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    /// Last known geometry, as reported or requested by the client.
    pub rectangle: Xyhw,
    pub transient: bool,
    floating: bool,
    fullscreen: bool,
}

impl<H: Handle> Client<H> {
    #[must_use]
    pub const fn new(handle: WindowHandle<H>, rectangle: Xyhw) -> Self {
        Self {
            handle,
            rectangle,
            transient: false,
            floating: false,
            fullscreen: false,
        }
    }

    #[must_use]
    pub const fn is_floating(&self) -> bool {
        self.floating
    }

    #[must_use]
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub const fn is_tiled(&self) -> bool {
        !self.floating
    }

    pub(crate) fn set_floating(&mut self, value: bool) {
        self.floating = value;
    }

    pub(crate) fn set_fullscreen(&mut self, value: bool) {
        self.fullscreen = value;
    }
}
