use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    pub profile: String,
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

/// Browse-mode bindings. The search panel and the help overlay handle their
/// own keys directly, so only the browse map is configurable.
#[derive(Debug)]
pub struct KeyMap {
    pub browse: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut browse = HashMap::new();

        browse.insert(key(KeyCode::Char('q')), Action::Quit);
        browse.insert(key(KeyCode::Char('/')), Action::OpenSearch);
        browse.insert(key(KeyCode::Enter), Action::OpenSearch);
        browse.insert(key(KeyCode::Char('c')), Action::ClearCommitted);
        browse.insert(key(KeyCode::Char('r')), Action::ReloadCatalog);
        browse.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        browse.insert(key(KeyCode::Esc), Action::DismissError);

        if let Some(custom) = &config.custom {
            for (key_name, action_name) in custom {
                if let (Some(event), Some(action)) = (parse_key(key_name), parse_action(action_name))
                {
                    browse.insert(event, action);
                }
            }
        }

        Self { browse }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.browse.get(&event).cloned()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn parse_key(name: &str) -> Option<KeyEvent> {
    let code = match name {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(key(code))
}

fn parse_action(name: &str) -> Option<Action> {
    match name {
        "quit" => Some(Action::Quit),
        "open-search" => Some(Action::OpenSearch),
        "clear-results" => Some(Action::ClearCommitted),
        "reload" => Some(Action::ReloadCatalog),
        "help" => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_binds_the_basics() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.get_action(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map.get_action(key(KeyCode::Char('/'))), Some(Action::OpenSearch));
        assert_eq!(map.get_action(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn custom_bindings_override_defaults() {
        let mut custom = HashMap::new();
        custom.insert("q".to_string(), "help".to_string());
        custom.insert("space".to_string(), "open-search".to_string());
        custom.insert("bogus-key".to_string(), "quit".to_string());
        custom.insert("z".to_string(), "not-an-action".to_string());

        let map = KeyMap::from_config(&KeyConfig {
            profile: "default".to_string(),
            custom: Some(custom),
        });

        assert_eq!(map.get_action(key(KeyCode::Char('q'))), Some(Action::ToggleHelp));
        assert_eq!(map.get_action(key(KeyCode::Char(' '))), Some(Action::OpenSearch));
        // Unparseable entries are ignored, not errors.
        assert_eq!(map.get_action(key(KeyCode::Char('z'))), None);
    }
}
