use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::window;

use super::ports::KeyValueStorage;

pub const SIDER_FOLD_KEY: &str = "siderFold";
pub const DARK_THEME_KEY: &str = "darkTheme";
pub const NAV_OPEN_KEYS_KEY: &str = "navOpenKeys";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::warn!("localStorage write of {} failed: {:?}", key, e);
        }
    }
}

/// Volatile storage, used when localStorage is unavailable and in tests.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// localStorage when the browser grants it (it may not in private mode).
pub fn browser_or_memory() -> Rc<dyn KeyValueStorage> {
    match get_local_storage() {
        Some(storage) => Rc::new(BrowserStorage { storage }),
        None => {
            log::warn!("localStorage unavailable, layout preferences will not persist");
            Rc::new(MemoryStorage::default())
        }
    }
}

/// `"true"` is the only truthy value, anything else (or nothing) is false.
pub fn read_flag(storage: &dyn KeyValueStorage, key: &str) -> bool {
    storage.get_item(key).as_deref() == Some("true")
}

pub fn write_flag(storage: &dyn KeyValueStorage, key: &str, value: bool) {
    storage.set_item(key, if value { "true" } else { "false" });
}

pub fn read_json<T: serde::de::DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Option<T> {
    let raw = storage.get_item(key)?;
    serde_json::from_str(&raw).ok()
}

pub fn write_json<T: serde::Serialize>(storage: &dyn KeyValueStorage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.set_item(key, &raw),
        Err(e) => log::warn!("Failed to encode {}: {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let storage = MemoryStorage::default();
        assert!(!read_flag(&storage, "fold"));

        write_flag(&storage, "fold", true);
        assert_eq!(storage.get_item("fold").as_deref(), Some("true"));
        assert!(read_flag(&storage, "fold"));

        storage.set_item("fold", "yes");
        assert!(!read_flag(&storage, "fold"));
    }

    #[test]
    fn test_json_values() {
        let storage = MemoryStorage::default();
        write_json(&storage, "keys", &vec!["2".to_string(), "4".to_string()]);
        assert_eq!(storage.get_item("keys").as_deref(), Some(r#"["2","4"]"#));

        let keys: Option<Vec<String>> = read_json(&storage, "keys");
        assert_eq!(keys, Some(vec!["2".to_string(), "4".to_string()]));

        storage.set_item("keys", "not json");
        assert_eq!(read_json::<Vec<String>>(&storage, "keys"), None);
    }
}
