mod settings;

pub use settings::{save_default_tab, Config, PanelConfig, EXAMPLE_CONFIG};
