//! How the core asks the outer layers for configuration.

use serde::{Deserialize, Serialize};

use crate::models::WorkspaceId;

/// One virtual output the headless backend should create.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Refresh rate in millihertz.
    pub refresh_mhz: i32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
            refresh_mhz: 60_000,
        }
    }
}

/// One workspace to create at startup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    pub id: WorkspaceId,
    pub name: String,
    /// Falls back to `Config::default_layout` when absent.
    pub layout: Option<String>,
}

pub trait Config {
    fn outputs(&self) -> Vec<OutputConfig>;

    fn workspaces(&self) -> Vec<WorkspaceConfig>;

    /// Focus a window when it is created.
    fn focus_new_windows(&self) -> bool;

    /// Layout name for workspaces created without one.
    fn default_layout(&self) -> String;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
pub struct TestConfig {
    pub outputs: Vec<OutputConfig>,
    pub workspaces: Vec<WorkspaceConfig>,
    pub focus_new_windows: bool,
    pub default_layout: String,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            outputs: vec![OutputConfig::default()],
            workspaces: vec![WorkspaceConfig {
                id: 1,
                name: "main".to_owned(),
                layout: None,
            }],
            focus_new_windows: false,
            default_layout: crate::layouts::FLOATING.to_owned(),
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn outputs(&self) -> Vec<OutputConfig> {
        self.outputs.clone()
    }
    fn workspaces(&self) -> Vec<WorkspaceConfig> {
        self.workspaces.clone()
    }
    fn focus_new_windows(&self) -> bool {
        self.focus_new_windows
    }
    fn default_layout(&self) -> String {
        self.default_layout.clone()
    }
}
