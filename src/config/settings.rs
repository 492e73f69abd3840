use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::export::{PageSetup, Paper};
use crate::ui::action::parse_action;
use crate::util::paths::config_path;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyContext, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

const MIN_FONT_SIZE: f32 = 6.0;
const MAX_FONT_SIZE: f32 = 24.0;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that receives the exported file
    pub output_dir: PathBuf,
    /// Paper and font settings for export
    pub page: PageSetup,
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            page: PageSetup::default(),
            keybindings: default_keybindings(),
        }
    }
}

/// TOML representation of keybinding configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Global keybindings (apply to all contexts)
    #[serde(flatten)]
    pub global: HashMap<String, toml::Value>,

    /// Form editing keybindings
    pub form: Option<HashMap<String, String>>,

    /// Entry dragging keybindings
    pub dragging: Option<HashMap<String, String>>,

    /// Dialog keybindings
    pub dialog: Option<HashMap<String, String>>,
}

/// TOML representation of export settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlExportConfig {
    pub output_dir: Option<PathBuf>,
    pub paper: Option<Paper>,
    pub font_size: Option<f32>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub export: Option<TomlExportConfig>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    /// Convert TOML keybindings to KeybindingConfig
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();

        for (action_name, value) in &self.global {
            // Context tables are handled separately
            let toml::Value::String(key_str) = value else {
                continue;
            };
            match (parse_key_notation(key_str), parse_action(action_name)) {
                (Ok(combo), Some(action)) => {
                    config.global.insert(combo, action);
                }
                _ => {
                    tracing::warn!(
                        action = %action_name,
                        key = %key_str,
                        "Ignoring invalid keybinding"
                    );
                }
            }
        }

        if let Some(form) = &self.form {
            parse_context_bindings(&mut config, KeyContext::Form, form);
        }
        if let Some(dragging) = &self.dragging {
            parse_context_bindings(&mut config, KeyContext::Dragging, dragging);
        }
        if let Some(dialog) = &self.dialog {
            parse_context_bindings(&mut config, KeyContext::Dialog, dialog);
        }

        config
    }
}

/// Parse context-specific keybindings
fn parse_context_bindings(
    config: &mut KeybindingConfig,
    context: KeyContext,
    bindings: &HashMap<String, String>,
) {
    let context_map = config.context.entry(context).or_default();
    for (action_name, key_str) in bindings {
        match (parse_key_notation(key_str), parse_action(action_name)) {
            (Ok(combo), Some(action)) => {
                context_map.insert(combo, action);
            }
            _ => {
                tracing::warn!(
                    context = context.config_name(),
                    action = %action_name,
                    key = %key_str,
                    "Ignoring invalid keybinding"
                );
            }
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

impl Config {
    /// Load configuration from file, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        let contents = match fs::read_to_string(&config_file) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(
                    path = %config_file.display(),
                    error = %e,
                    "No readable config file, using defaults"
                );
                return Config::default();
            }
        };

        match Self::from_toml_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %config_file.display(),
                    error = %e,
                    "Failed to parse config file, using defaults"
                );
                Config::default()
            }
        }
    }

    /// Build a config from TOML text layered over the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(export) = toml_config.export {
            if let Some(dir) = export.output_dir {
                config.output_dir = expand_home(&dir);
            }
            if let Some(paper) = export.paper {
                config.page.paper = paper;
            }
            if let Some(size) = export.font_size {
                config.page.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
            }
        }

        // Merge user keybindings on top of defaults
        if let Some(keys) = toml_config.keys {
            config.keybindings.merge(keys.to_keybinding_config());
        }

        Ok(config)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::action::Action;

    #[test]
    fn test_example_config_parses() {
        let config = Config::from_toml_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.page.paper, Paper::Letter);
        assert_eq!(config.page.font_size, 11.0);
    }

    #[test]
    fn test_export_section_overrides_defaults() {
        let config = Config::from_toml_str(
            r#"
            [export]
            output_dir = "/tmp/cv"
            paper = "a4"
            font_size = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/cv"));
        assert_eq!(config.page.paper, Paper::A4);
        assert_eq!(config.page.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn test_user_keys_merge_over_defaults() {
        let config = Config::from_toml_str(
            r#"
            [keys]
            export = "<F5>"
            bogus = "C-x"

            [keys.form]
            add_entry = "C-o"
            "#,
        )
        .unwrap();

        let f5 = parse_key_notation("<F5>").unwrap();
        let c_o = parse_key_notation("C-o").unwrap();
        let c_p = parse_key_notation("C-p").unwrap();
        assert_eq!(
            config.keybindings.get_action(&f5, KeyContext::Form),
            Some(Action::Export)
        );
        assert_eq!(
            config.keybindings.get_action(&c_o, KeyContext::Form),
            Some(Action::AddEntry)
        );
        // Defaults survive
        assert_eq!(
            config.keybindings.get_action(&c_p, KeyContext::Form),
            Some(Action::Export)
        );
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(Config::from_toml_str("[export\npaper = ").is_err());
        assert!(Config::from_toml_str("[export]\npaper = \"legal\"").is_err());
    }

    #[test]
    fn test_expand_home() {
        let plain = expand_home(Path::new("/var/out"));
        assert_eq!(plain, PathBuf::from("/var/out"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/cv")), home.join("cv"));
        }
    }
}
