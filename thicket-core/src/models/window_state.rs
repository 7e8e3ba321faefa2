use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// The `_NET_WM_STATE` properties a client can ask for.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowState {
    Modal,
    Sticky,
    MaximizedVert,
    MaximizedHorz,
    Shaded,
    SkipTaskbar,
    SkipPager,
    Hidden,
    Fullscreen,
    Above,
    Below,
    DemandsAttention,
}

/// What a `_NET_WM_STATE` client message asks to do with a state.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StateAction {
    Remove,
    Add,
    Toggle,
}

impl StateAction {
    /// Resolve the requested action against the current value of a flag.
    #[must_use]
    pub const fn resolve(self, current: bool) -> bool {
        match self {
            Self::Add => true,
            Self::Remove => false,
            Self::Toggle => !current,
        }
    }
}

impl TryFrom<i64> for StateAction {
    type Error = i64;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Remove),
            1 => Ok(Self::Add),
            2 => Ok(Self::Toggle),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_should_ignore_the_current_value() {
        for current in [true, false] {
            assert!(StateAction::Add.resolve(current));
            assert!(!StateAction::Remove.resolve(current));
        }
    }

    #[test]
    fn toggle_should_negate_the_current_value() {
        assert!(StateAction::Toggle.resolve(false));
        assert!(!StateAction::Toggle.resolve(true));
    }

    #[test]
    fn action_codes_follow_ewmh() {
        assert_eq!(StateAction::try_from(0), Ok(StateAction::Remove));
        assert_eq!(StateAction::try_from(1), Ok(StateAction::Add));
        assert_eq!(StateAction::try_from(2), Ok(StateAction::Toggle));
        assert_eq!(StateAction::try_from(3), Err(3));
    }
}
