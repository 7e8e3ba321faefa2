use super::Config;
use anyhow::{bail, Result};

/// Gaps and borders at least this large swallow a whole window on common screens.
const MAX_SPACING: u32 = 540;

impl Config {
    /// Rejects configurations the window manager cannot run with.
    ///
    /// # Errors
    ///
    /// Errors when no desktop is configured, the split ratio is outside `(0, 1)` or the gap or
    /// border would swallow a window.
    pub fn check(&self) -> Result<()> {
        if self.desktops.is_empty() {
            bail!("at least one desktop must be configured");
        }
        if !(self.split_ratio > 0.0 && self.split_ratio < 1.0) {
            bail!(
                "split_ratio must lie strictly between 0 and 1, got {}",
                self.split_ratio
            );
        }
        if self.window_gap >= MAX_SPACING {
            bail!("window_gap must be below {MAX_SPACING}, got {}", self.window_gap);
        }
        if self.border_width >= MAX_SPACING {
            bail!("border_width must be below {MAX_SPACING}, got {}", self.border_width);
        }
        Ok(())
    }

    /// Prints the window rules that can never match.
    pub fn check_window_rules(&self, verbose: bool) {
        if verbose {
            println!("Checking {} window rules.", self.window_rules.len());
        }
        for rule in &self.window_rules {
            if rule.class.is_none() && rule.instance.is_none() {
                println!("\x1b[1;93mWARN: Window rule {rule:?} has no class or instance and never applies.\x1b[0m");
            } else if rule.floating.is_none() && rule.focus.is_none() {
                println!("\x1b[1;93mWARN: Window rule {rule:?} changes nothing.\x1b[0m");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_should_pass() {
        assert!(Config::default().check().is_ok());
    }

    #[test]
    fn empty_desktops_should_fail() {
        let config = Config {
            desktops: vec![],
            ..Config::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn split_ratio_bounds_should_be_exclusive() {
        for ratio in [0.0, 1.0, -0.5, 1.5, f32::NAN] {
            let config = Config {
                split_ratio: ratio,
                ..Config::default()
            };
            assert!(config.check().is_err(), "ratio {ratio} accepted");
        }
        let config = Config {
            split_ratio: 0.3,
            ..Config::default()
        };
        assert!(config.check().is_ok());
    }

    #[test]
    fn oversized_spacing_should_fail() {
        let config = Config {
            window_gap: 3_000_000_000,
            ..Config::default()
        };
        assert!(config.check().is_err());
        let config = Config {
            border_width: 540,
            ..Config::default()
        };
        assert!(config.check().is_err());
        let config = Config {
            window_gap: 20,
            border_width: 4,
            ..Config::default()
        };
        assert!(config.check().is_ok());
    }
}
