//! Settings persistence coordination.
//!
//! Settings are stored as JSON strings in eframe's persistent storage, keyed
//! by name. Missing or unreadable values fall back to a caller default so a
//! stale stored value never blocks startup.

use serde::{Deserialize, Serialize};

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `default` when it is absent or invalid.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        let Some(json_str) = storage.and_then(|storage| storage.get_string(key)) else {
            return default;
        };
        match serde_json::from_str(&json_str) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("ignoring stored setting {:?}: {}", key, e);
                default
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("could not store setting {:?}: {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rjview::{RenderStrategy, ViewerConfig};
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_config() {
        let mut storage = MockStorage::new();
        let config = ViewerConfig {
            block_size: 250,
            strategy: RenderStrategy::Append,
            ..ViewerConfig::default()
        };

        SettingsCoordinator::save_setting(&mut storage, "viewer_config", &config);
        let loaded: ViewerConfig =
            SettingsCoordinator::load_setting_or(Some(&storage), "viewer_config", ViewerConfig::default());
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let storage = MockStorage::new();
        let loaded: ViewerConfig =
            SettingsCoordinator::load_setting_or(Some(&storage), "viewer_config", ViewerConfig::default());
        assert_eq!(loaded, ViewerConfig::default());

        let loaded: i32 = SettingsCoordinator::load_setting_or(None, "anything", 7);
        assert_eq!(loaded, 7);
    }

    #[test]
    fn test_corrupt_value_uses_default() {
        let mut storage = MockStorage::new();
        storage.set_string("viewer_config", "{not json".to_string());
        let loaded: ViewerConfig =
            SettingsCoordinator::load_setting_or(Some(&storage), "viewer_config", ViewerConfig::default());
        assert_eq!(loaded, ViewerConfig::default());
    }

    #[test]
    fn test_older_stored_config_keeps_new_defaults() {
        let mut storage = MockStorage::new();
        storage.set_string("viewer_config", r#"{"block_size": 40}"#.to_string());
        let loaded: ViewerConfig =
            SettingsCoordinator::load_setting_or(Some(&storage), "viewer_config", ViewerConfig::default());
        assert_eq!(loaded.block_size, 40);
        assert_eq!(loaded.look_around, 1);
    }
}
