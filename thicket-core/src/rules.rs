//! Decide how a newly mapped window starts out.
use crate::display_event::WindowHints;
use crate::models::{Handle, WindowHandle, WindowType};
use serde::{Deserialize, Serialize};

/// Selecting by `WM_CLASS`, allow the user to define if a window should float and/or take focus
/// when it is mapped.
///
/// # Example
///
/// In `config.toml`
///
/// ```toml
/// [[window_rules]]
/// class = "Gimp"
/// floating = true
/// focus = false
/// ```
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct WindowRule {
    /// Class part of `WM_CLASS`
    pub class: Option<String>,
    /// Instance part of `WM_CLASS`
    pub instance: Option<String>,
    pub floating: Option<bool>,
    pub focus: Option<bool>,
}

impl WindowRule {
    /// A rule without any selector matches nothing.
    fn matches<H: Handle>(&self, hints: &WindowHints<H>) -> bool {
        if self.class.is_none() && self.instance.is_none() {
            return false;
        }
        let class_ok = self.class.is_none() || self.class == hints.class;
        let instance_ok = self.instance.is_none() || self.instance == hints.instance;
        class_ok && instance_ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub floating: bool,
    pub transient: bool,
    pub takes_focus: bool,
}

impl Default for RuleOutcome {
    fn default() -> Self {
        Self {
            floating: false,
            transient: false,
            takes_focus: true,
        }
    }
}

pub fn handle_rules<H: Handle>(
    rules: &[WindowRule],
    handle: WindowHandle<H>,
    hints: &WindowHints<H>,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    match hints.window_type {
        WindowType::Toolbar | WindowType::Utility => outcome.takes_focus = false,
        WindowType::Dialog | WindowType::Splash => outcome.floating = true,
        _ => {}
    }

    if hints.fixed_size {
        outcome.floating = true;
    }

    outcome.transient = hints.transient_for.is_some();

    for rule in rules.iter().filter(|r| r.matches(hints)) {
        tracing::debug!("Window rule {:?} matches {:?}", rule, handle);
        if let Some(floating) = rule.floating {
            outcome.floating = floating;
        }
        if let Some(focus) = rule.focus {
            outcome.takes_focus = focus;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    fn hints(class: &str) -> WindowHints<MockHandle> {
        WindowHints {
            class: Some(class.to_string()),
            instance: Some(class.to_lowercase()),
            ..WindowHints::default()
        }
    }

    #[test]
    fn a_plain_window_should_tile_and_take_focus() {
        let outcome = handle_rules(&[], WindowHandle(1), &hints("Alacritty"));
        assert_eq!(outcome, RuleOutcome::default());
    }

    #[test]
    fn dialogs_should_float() {
        let hints = WindowHints {
            window_type: WindowType::Dialog,
            ..hints("Firefox")
        };
        assert!(handle_rules(&[], WindowHandle(1), &hints).floating);
    }

    #[test]
    fn utility_windows_should_not_take_focus() {
        let hints = WindowHints {
            window_type: WindowType::Utility,
            ..hints("Gimp")
        };
        let outcome = handle_rules(&[], WindowHandle(1), &hints);
        assert!(!outcome.takes_focus);
        assert!(!outcome.floating);
    }

    #[test]
    fn fixed_size_windows_should_float() {
        let hints = WindowHints {
            fixed_size: true,
            ..hints("Pinentry")
        };
        assert!(handle_rules(&[], WindowHandle(1), &hints).floating);
    }

    #[test]
    fn a_transient_hint_should_be_reported() {
        let hints = WindowHints {
            transient_for: Some(WindowHandle(4)),
            ..hints("Firefox")
        };
        assert!(handle_rules(&[], WindowHandle(1), &hints).transient);
    }

    #[test]
    fn user_rules_should_override_the_defaults() {
        let rules = vec![
            WindowRule {
                class: Some("Gimp".to_string()),
                floating: Some(true),
                ..WindowRule::default()
            },
            WindowRule {
                instance: Some("gimp".to_string()),
                focus: Some(false),
                ..WindowRule::default()
            },
            WindowRule {
                class: Some("Other".to_string()),
                floating: Some(false),
                ..WindowRule::default()
            },
        ];
        let outcome = handle_rules(&rules, WindowHandle(1), &hints("Gimp"));
        assert!(outcome.floating);
        assert!(!outcome.takes_focus);
    }

    #[test]
    fn a_rule_without_selector_matches_nothing() {
        let rules = vec![WindowRule {
            floating: Some(true),
            ..WindowRule::default()
        }];
        assert!(!handle_rules(&rules, WindowHandle(1), &hints("Gimp")).floating);
    }
}
