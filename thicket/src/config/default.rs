use super::Config;

impl Default for Config {
    fn default() -> Self {
        let desktops = ["1", "2", "3", "4", "5", "6", "7", "8", "9"]
            .iter()
            .map(|name| (*name).to_string())
            .collect();

        Self {
            desktops,
            border_width: 1,
            window_gap: 0,
            split_ratio: 0.5,
            window_rules: vec![],
        }
    }
}
