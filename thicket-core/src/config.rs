use crate::rules::WindowRule;

pub trait Config {
    /// Names of the desktops to create, in order. The first one starts active.
    fn desktop_names(&self) -> Vec<String>;

    fn border_width(&self) -> u32;

    /// Space left around each tiled window.
    fn window_gap(&self) -> u32;

    /// Share of the split leaf kept by the old window when a new one is inserted.
    fn split_ratio(&self) -> f32;

    fn window_rules(&self) -> Vec<WindowRule>;
}

#[cfg(test)]
pub struct TestConfig {
    pub desktops: Vec<String>,
    pub rules: Vec<WindowRule>,
}

#[cfg(test)]
impl Config for TestConfig {
    fn desktop_names(&self) -> Vec<String> {
        self.desktops.clone()
    }
    fn border_width(&self) -> u32 {
        0
    }
    fn window_gap(&self) -> u32 {
        0
    }
    fn split_ratio(&self) -> f32 {
        0.5
    }
    fn window_rules(&self) -> Vec<WindowRule> {
        self.rules.clone()
    }
}
