//! TOML-backed configuration for the demo binary.

use std::fs;
use std::path::Path;

use anyhow::Context;
use oriel_core::{Config, OutputConfig, WorkspaceConfig};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub outputs: Vec<OutputConfig>,
    pub workspaces: Vec<WorkspaceConfig>,
    pub focus_new_windows: bool,
    pub default_layout: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            outputs: vec![OutputConfig::default()],
            workspaces: vec![WorkspaceConfig {
                id: 1,
                name: "main".to_owned(),
                layout: None,
            }],
            focus_new_windows: true,
            default_layout: "Floating".to_owned(),
        }
    }
}

impl FileConfig {
    /// Load from a file, or fall back to the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}

impl Config for FileConfig {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_default_config_should_give_one_output_and_one_workspace() {
        let config = FileConfig::default();
        assert_eq!(config.outputs.len(), 1);
        assert_eq!(config.outputs[0].width, 1920);
        assert_eq!(config.workspaces.len(), 1);
        assert_eq!(config.workspaces[0].name, "main");
    }

    #[test]
    fn a_config_file_should_parse() {
        let config: FileConfig = toml::from_str(
            r#"
            default_layout = "EvenHorizontal"

            [[outputs]]
            x = 0
            y = 0
            width = 2560
            height = 1440
            refresh_mhz = 144000

            [[workspaces]]
            id = 1
            name = "web"

            [[workspaces]]
            id = 2
            name = "code"
            layout = "Floating"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.outputs[0].refresh_mhz, 144_000);
        assert_eq!(config.workspaces[1].layout.as_deref(), Some("Floating"));
        assert_eq!(config.default_layout, "EvenHorizontal");
    }
}
